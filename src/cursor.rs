//! Cursor input boundary.
//!
//! The simulation is fed one [`CursorInput`] per tick, already converted to
//! world space by the host. Degenerate conversions are clamped here, before
//! the physics ever sees them.

use glam::Vec2;

/// One frame of pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorInput {
    pub position: Vec2,
    pub pressed: bool,
}

impl CursorInput {
    pub fn new(position: Vec2, pressed: bool) -> Self {
        Self {
            position: sanitize(position),
            pressed,
        }
    }
}

/// Clamp non-finite screen-to-world results to the origin.
pub fn sanitize(position: Vec2) -> Vec2 {
    if position.x.is_finite() && position.y.is_finite() {
        position
    } else {
        Vec2::ZERO
    }
}
