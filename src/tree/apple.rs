use crate::dynamics::{Body, Spring};
use glam::Vec2;

/// Tunables for a single apple.
#[derive(Debug, Clone, Copy)]
pub struct AppleConfig {
    /// How close the cursor must be to pick the apple up.
    pub pick_radius: f32,
    /// How far the apple can be pulled before the stem starts giving way.
    pub attach_radius: f32,
    /// Seconds of pulling past the radius before the stem snaps.
    pub resistance_time: f32,
    /// Extra reach gained over the resistance window.
    pub resistance_magnitude: f32,
    /// Radius around the goal that counts as a score.
    pub goal_radius: f32,
    /// Spin gained per unit of sideways drag.
    pub angular_acceleration: f32,
    pub spring_frequency: f32,
    pub spring_damping: f32,
    pub gravity: f32,
    pub angular_damping: f32,
}

impl Default for AppleConfig {
    fn default() -> Self {
        Self {
            pick_radius: 0.35,
            attach_radius: 0.6,
            resistance_time: 1.2,
            resistance_magnitude: 0.4,
            goal_radius: 0.8,
            angular_acceleration: 40.0,
            spring_frequency: 60.0,
            spring_damping: 0.85,
            gravity: 9.8,
            angular_damping: 0.95,
        }
    }
}

/// What an apple did during a call; the tree translates these for its own
/// listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppleEvent {
    Grabbed,
    Released,
    /// The stem snapped: the apple no longer hangs from the tree.
    Detached,
    /// Released over the goal; the apple deactivates and drifts onto it.
    Scored,
    /// The stem strains another notch while being pulled.
    Creak { pitch: f32 },
}

/// An apple hanging from the canopy, or loose once pulled off.
#[derive(Debug, Clone)]
pub struct Apple {
    config: AppleConfig,
    body: Body,
    spring: Spring,
    origin: Vec2,
    goal: Vec2,
    attached: bool,
    grabbed: bool,
    active: bool,
    resistance_timer: f32,
    previous_pitch_step: i32,
    last_position: Vec2,
}

impl Apple {
    /// A fresh apple hangs at `origin` with its spring parked there and
    /// gravity off.
    pub fn new(origin: Vec2, goal: Vec2, config: AppleConfig) -> Self {
        let body = Body::new(origin)
            .with_gravity(config.gravity)
            .with_angular_damping(config.angular_damping);
        let spring = Spring::new(origin, config.spring_frequency, config.spring_damping);

        Self {
            config,
            body,
            spring,
            origin,
            goal,
            attached: true,
            grabbed: false,
            active: true,
            resistance_timer: 0.0,
            previous_pitch_step: 0,
            last_position: origin,
        }
    }

    /// Pick the apple up: the spring takes over and gravity stops.
    pub fn grab(&mut self, events: &mut Vec<AppleEvent>) {
        if !self.active {
            return;
        }

        self.grabbed = true;
        self.spring.set_enabled(true);
        if self.body.is_using_gravity() {
            self.body.set_gravity(false);
            self.body.set_velocity(Vec2::ZERO);
        }
        self.last_position = self.body.position;
        events.push(AppleEvent::Grabbed);
    }

    /// Let go. A loose apple falls again, unless it is over the goal, in
    /// which case it deactivates and parks its spring on the goal. A loose
    /// apple dropped on the goal keeps its spring off and simply freezes
    /// there.
    pub fn release(&mut self, events: &mut Vec<AppleEvent>) {
        if !self.active {
            return;
        }

        self.grabbed = false;
        if !self.attached {
            self.body.set_gravity(true);
            self.spring.set_enabled(false);
        }

        if self.body.position.distance(self.goal) <= self.config.goal_radius {
            if self.attached {
                self.attached = false;
                events.push(AppleEvent::Detached);
            }
            self.active = false;
            self.body.set_gravity(false);
            self.spring.set_target(self.goal);
            events.push(AppleEvent::Scored);
        } else {
            events.push(AppleEvent::Released);
        }
    }

    /// Advance one tick. While grabbed, the spring chases the cursor; an
    /// attached apple pulled past its radius strains against the stem until
    /// it snaps. Spin winds up from sideways drag.
    pub fn tick(&mut self, dt: f32, cursor: Vec2, events: &mut Vec<AppleEvent>) {
        if !self.active {
            // Scored apples still settle onto the goal.
            self.body.step(Some(&self.spring), dt);
            return;
        }

        let mut target = self.origin;
        if self.grabbed {
            let distance = cursor.distance(self.origin);
            if self.attached && distance > self.config.attach_radius {
                // Held at the edge of a slowly growing radius until the stem
                // gives out.
                let progress = self.resistance_timer / self.config.resistance_time;
                let reach = self.config.attach_radius + progress * self.config.resistance_magnitude;
                target = self.origin + (cursor - self.origin).normalize_or_zero() * reach;

                self.resistance_timer += dt;
                if self.resistance_timer > self.config.resistance_time {
                    self.attached = false;
                    events.push(AppleEvent::Detached);
                }

                let pitch_step = (progress * 10.0).floor() as i32;
                if pitch_step != self.previous_pitch_step {
                    self.previous_pitch_step = pitch_step;
                    events.push(AppleEvent::Creak {
                        pitch: 1.0 + pitch_step as f32 * 0.1,
                    });
                }
            } else {
                target = cursor;
            }

            let drag = self.last_position - self.body.position;
            let spin = if drag.x > 0.0 { 1.0 } else { -1.0 };
            self.body
                .add_angular_velocity(spin * drag.length() * self.config.angular_acceleration);
        }

        self.spring.set_target(target);
        self.last_position = self.body.position;
        self.body.step(Some(&self.spring), dt);
    }

    /// Move the point the apple hangs from; the canopy sways, so this shifts
    /// every tick while attached.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn rotation(&self) -> f32 {
        self.body.rotation
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// False once the apple has scored.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn config(&self) -> &AppleConfig {
        &self.config
    }
}
