use super::apple::{Apple, AppleConfig, AppleEvent};
use super::trunk::Trunk;
use crate::cursor::{sanitize, CursorInput};
use crate::dynamics::{Body, Spring};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Everything observable that happens to the tree during a tick, drained by
/// the caller. Apples are identified by their index into [`Tree::apples`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeEvent {
    TreeBuilt,
    AppleSpawned { apple: usize },
    AppleGrabbed { apple: usize },
    AppleReleased { apple: usize },
    AppleDetached { apple: usize },
    AppleScored { apple: usize },
    Creak { pitch: f32 },
    /// The goal indicator should show or hide.
    GoalShown(bool),
}

#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub base: Vec2,
    pub joint_count: usize,
    pub height: f32,
    pub tolerance: f32,
    pub max_iterations: u32,
    /// How far a grabbed apple can drag the tree top from its rest pose.
    pub drag_radius: f32,
    /// Where apples hang, as offsets from the (swaying) tree top.
    pub spawn_offsets: Vec<Vec2>,
    pub goal: Vec2,
    pub top_spring_frequency: f32,
    pub top_spring_damping: f32,
    pub apple: AppleConfig,
    pub rng_seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            base: Vec2::ZERO,
            joint_count: 20,
            height: 4.0,
            tolerance: 0.01,
            max_iterations: 10,
            drag_radius: 1.0,
            spawn_offsets: vec![
                Vec2::new(-1.0, -0.4),
                Vec2::new(0.9, -0.2),
                Vec2::new(0.2, -0.8),
            ],
            goal: Vec2::new(4.0, 0.5),
            top_spring_frequency: 40.0,
            top_spring_damping: 0.88,
            apple: AppleConfig::default(),
            rng_seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    apple: Apple,
    /// Spawn slot the apple occupies, freed when the stem snaps.
    slot: Option<usize>,
}

/// The whole toy: trunk chain, spring-mounted tree top, apples, goal.
///
/// One [`Tree::tick`] runs a full simulation step in a fixed order: input,
/// grab/release edges, spring updates, IK solve, event drain. All state is
/// committed before the call returns, so the next tick always sees the
/// finished previous one.
pub struct Tree {
    config: TreeConfig,
    trunk: Trunk,
    top_body: Body,
    top_spring: Spring,
    top_target: Vec2,
    apples: Vec<Entry>,
    /// Apple the cursor is holding. Survives a stem snap; only a release
    /// clears it.
    held: Option<usize>,
    /// Apple the tree top follows. Cleared as soon as the stem snaps.
    current: Option<usize>,
    /// Where the held apple sat when it was grabbed; the tree top drag is
    /// measured from here.
    grab_origin: Vec2,
    spawn_timer: f32,
    spawn_delay: f32,
    goal_shown: bool,
    prev_pressed: bool,
    rng: StdRng,
    events: Vec<TreeEvent>,
}

impl Tree {
    pub fn new(config: TreeConfig) -> Self {
        let trunk = Trunk::new(
            config.base,
            config.joint_count,
            config.height,
            config.tolerance,
            config.max_iterations,
        );
        let top_rest = trunk.top_rest();
        let top_body = Body::new(top_rest);
        let top_spring = Spring::new(
            top_rest,
            config.top_spring_frequency,
            config.top_spring_damping,
        );
        let rng = StdRng::seed_from_u64(config.rng_seed);

        log::debug!(
            "tree built: {} joints over {} units, {} spawn slots",
            config.joint_count,
            config.height,
            config.spawn_offsets.len()
        );

        Self {
            config,
            trunk,
            top_body,
            top_spring,
            top_target: top_rest,
            apples: Vec::new(),
            held: None,
            current: None,
            grab_origin: top_rest,
            spawn_timer: 0.0,
            spawn_delay: 0.5,
            goal_shown: false,
            prev_pressed: false,
            rng,
            events: vec![TreeEvent::TreeBuilt],
        }
    }

    /// Run one simulation step and return everything that happened.
    pub fn tick(&mut self, dt: f32, input: CursorInput) -> Vec<TreeEvent> {
        let cursor = sanitize(input.position);

        if input.pressed && !self.prev_pressed {
            self.try_grab(cursor);
        }
        if !input.pressed && self.prev_pressed {
            self.release();
        }
        self.prev_pressed = input.pressed;

        // The tree top chases the held apple, clamped to the drag radius.
        if let Some(index) = self.current {
            let apple = &self.apples[index].apple;
            if apple.is_attached() {
                let mut delta = apple.position() - self.grab_origin;
                if delta.length() > self.config.drag_radius {
                    delta = delta.normalize_or_zero() * self.config.drag_radius;
                }
                self.top_target = self.trunk.top_rest() + delta;
            }
        }
        self.top_spring.set_target(self.top_target);
        self.top_body.step(Some(&self.top_spring), dt);

        // Hanging apples ride the swaying canopy.
        let top = self.top_body.position;
        for entry in &mut self.apples {
            if let Some(slot) = entry.slot {
                entry.apple.set_origin(top + self.config.spawn_offsets[slot]);
            }
        }

        let mut apple_events = Vec::new();
        for index in 0..self.apples.len() {
            apple_events.clear();
            self.apples[index].apple.tick(dt, cursor, &mut apple_events);
            self.translate(index, &apple_events);
        }

        self.respawn(dt);

        // Finally bend the trunk after the tree top.
        self.trunk.solve_towards(self.top_body.position);

        std::mem::take(&mut self.events)
    }

    /// Pick up the nearest apple under the cursor, if any.
    fn try_grab(&mut self, cursor: Vec2) {
        let mut best: Option<(usize, f32)> = None;
        for (index, entry) in self.apples.iter().enumerate() {
            if !entry.apple.is_active() {
                continue;
            }
            let distance = entry.apple.position().distance(cursor);
            if distance <= self.config.apple.pick_radius
                && best.map_or(true, |(_, nearest)| distance < nearest)
            {
                best = Some((index, distance));
            }
        }
        let Some((index, _)) = best else { return };

        let mut events = Vec::new();
        self.apples[index].apple.grab(&mut events);
        self.held = Some(index);
        self.current = Some(index);
        if self.apples[index].apple.is_attached() {
            self.grab_origin = self.apples[index].apple.position();
        } else {
            self.set_goal_shown(true);
        }
        self.translate(index, &events);
    }

    fn release(&mut self) {
        let Some(index) = self.held.take() else {
            return;
        };
        self.current = None;

        let mut events = Vec::new();
        self.apples[index].apple.release(&mut events);
        self.translate(index, &events);

        if !self.apples[index].apple.is_attached() {
            self.top_target = self.trunk.top_rest();
        }
        self.set_goal_shown(false);
    }

    /// Map one apple's events onto the tree, applying the side effects a
    /// snapped stem has on the rest of the toy.
    fn translate(&mut self, index: usize, events: &[AppleEvent]) {
        for &event in events {
            match event {
                AppleEvent::Grabbed => self.events.push(TreeEvent::AppleGrabbed { apple: index }),
                AppleEvent::Released => self.events.push(TreeEvent::AppleReleased { apple: index }),
                AppleEvent::Detached => {
                    if self.current == Some(index) {
                        self.current = None;
                    }
                    self.apples[index].slot = None;
                    self.top_target = self.trunk.top_rest();
                    self.set_goal_shown(true);
                    self.spawn_timer = 0.0;
                    self.spawn_delay = 0.5;
                    log::debug!("apple {} snapped off", index);
                    self.events.push(TreeEvent::AppleDetached { apple: index });
                }
                AppleEvent::Scored => self.events.push(TreeEvent::AppleScored { apple: index }),
                AppleEvent::Creak { pitch } => self.events.push(TreeEvent::Creak { pitch }),
            }
        }
    }

    /// Refill empty spawn slots: half a second for the first apple after a
    /// slot opens, a second between the ones after it.
    fn respawn(&mut self, dt: f32) {
        let missing: Vec<usize> = (0..self.config.spawn_offsets.len())
            .filter(|slot| !self.apples.iter().any(|e| e.slot == Some(*slot)))
            .collect();
        if missing.is_empty() {
            self.spawn_timer = 0.0;
            return;
        }

        self.spawn_timer += dt;
        if self.spawn_timer < self.spawn_delay {
            return;
        }

        let slot = missing[self.rng.gen_range(0..missing.len())];
        let origin = self.top_body.position + self.config.spawn_offsets[slot];
        let apple = Apple::new(origin, self.config.goal, self.config.apple);
        self.apples.push(Entry {
            apple,
            slot: Some(slot),
        });
        let index = self.apples.len() - 1;
        log::debug!("apple {} spawned on slot {}", index, slot);
        self.events.push(TreeEvent::AppleSpawned { apple: index });

        self.spawn_timer = 0.0;
        self.spawn_delay = 1.0;
    }

    fn set_goal_shown(&mut self, shown: bool) {
        if self.goal_shown != shown {
            self.goal_shown = shown;
            self.events.push(TreeEvent::GoalShown(shown));
        }
    }

    pub fn trunk(&self) -> &Trunk {
        &self.trunk
    }

    pub fn apples(&self) -> impl Iterator<Item = &Apple> + '_ {
        self.apples.iter().map(|entry| &entry.apple)
    }

    pub fn apple(&self, index: usize) -> Option<&Apple> {
        self.apples.get(index).map(|entry| &entry.apple)
    }

    pub fn top_position(&self) -> Vec2 {
        self.top_body.position
    }

    pub fn top_target(&self) -> Vec2 {
        self.top_target
    }

    pub fn goal(&self) -> Vec2 {
        self.config.goal
    }

    pub fn is_goal_shown(&self) -> bool {
        self.goal_shown
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}
