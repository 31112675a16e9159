use glam::Vec2;

/// Spring attractor that accelerates a velocity towards a target point.
///
/// `damping` is the per-frame velocity retention at 60 fps; it is raised to
/// `dt * 60` each step so variable step sizes settle the same way. Values
/// are expected in `[0, 1)` but are not validated.
#[derive(Debug, Clone)]
pub struct Spring {
    target: Vec2,
    frequency: f32,
    damping: f32,
    enabled: bool,
}

impl Spring {
    pub fn new(target: Vec2, frequency: f32, damping: f32) -> Self {
        Self {
            target,
            frequency,
            damping,
            enabled: true,
        }
    }

    /// Point the spring pulls towards. Takes effect on the next step.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Accelerate `velocity` towards the target, then apply the decay.
    ///
    /// The force integrates into the velocity before the decay multiplies
    /// in; swapping the two changes how the motion settles.
    pub fn drive(&self, velocity: &mut Vec2, position: Vec2, dt: f32) {
        if !self.enabled {
            return;
        }

        let displacement = self.target - position;
        *velocity += displacement * self.frequency * dt;
        *velocity *= self.damping.powf(dt * 60.0);
    }
}
