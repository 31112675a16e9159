//! Audio boundary.
//!
//! The simulation never plays sounds itself: it emits [`TreeEvent`]s and
//! [`route`] translates the audible ones for whatever sink the host
//! provides.

use crate::tree::TreeEvent;

/// Sound effect identifiers the host maps to clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    AppleSpawn,
    AppleGrab,
    AppleRelease,
    AppleGoal,
    TreeShake,
    TreeCreak,
}

pub trait AudioSink {
    fn play(&mut self, sfx: Sfx);

    /// Play with a pitch multiplier, 1.0 meaning unmodified.
    fn play_pitched(&mut self, sfx: Sfx, pitch: f32);
}

/// Sink that only logs, for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, sfx: Sfx) {
        log::debug!("sfx: {:?}", sfx);
    }

    fn play_pitched(&mut self, sfx: Sfx, pitch: f32) {
        log::debug!("sfx: {:?} (pitch {:.2})", sfx, pitch);
    }
}

/// Forward the audible subset of `events` to `sink`.
pub fn route(events: &[TreeEvent], sink: &mut dyn AudioSink) {
    for event in events {
        match event {
            TreeEvent::TreeBuilt => sink.play(Sfx::AppleSpawn),
            TreeEvent::AppleGrabbed { .. } => sink.play(Sfx::AppleGrab),
            TreeEvent::AppleReleased { .. } => sink.play(Sfx::AppleRelease),
            TreeEvent::AppleScored { .. } => sink.play(Sfx::AppleGoal),
            TreeEvent::AppleDetached { .. } => sink.play(Sfx::TreeShake),
            TreeEvent::Creak { pitch } => sink.play_pitched(Sfx::TreeCreak, *pitch),
            TreeEvent::AppleSpawned { .. } | TreeEvent::GoalShown(_) => {}
        }
    }
}
