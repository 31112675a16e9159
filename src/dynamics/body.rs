use super::spring::Spring;
use glam::Vec2;

/// Point body with a linear and an independent angular channel.
///
/// The angular velocity decays by a constant factor every step regardless of
/// `dt`; the linear velocity is only damped through an attached [`Spring`].
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vec2,
    /// Orientation in degrees.
    pub rotation: f32,
    velocity: Vec2,
    angular_velocity: f32,
    use_gravity: bool,
    gravity: f32,
    angular_damping: f32,
}

impl Body {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            use_gravity: false,
            gravity: 0.0,
            angular_damping: 1.0,
        }
    }

    /// Set the gravity magnitude. Gravity still has to be switched on with
    /// [`Body::set_gravity`].
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_angular_damping(mut self, angular_damping: f32) -> Self {
        self.angular_damping = angular_damping;
        self
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn add_angular_velocity(&mut self, extra: f32) {
        self.angular_velocity += extra;
    }

    pub fn set_gravity(&mut self, enabled: bool) {
        self.use_gravity = enabled;
    }

    pub fn is_using_gravity(&self) -> bool {
        self.use_gravity
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Update order: gravity accelerates the velocity, then the spring (if
    /// any) pulls and decays it, then the position integrates. The angular
    /// channel decays and integrates on its own afterwards.
    pub fn step(&mut self, spring: Option<&Spring>, dt: f32) {
        if self.use_gravity {
            self.velocity += Vec2::NEG_Y * self.gravity * dt;
        }
        if let Some(spring) = spring {
            spring.drive(&mut self.velocity, self.position, dt);
        }
        self.position += self.velocity * dt;

        self.angular_velocity *= self.angular_damping;
        self.rotation += self.angular_velocity * dt;
    }
}
