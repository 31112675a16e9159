//! Math utilities module
//!
//! Re-exports the glam types used across the crate plus small angle helpers.

pub use glam::Vec2;

/// Angle of `v` in degrees, measured counter-clockwise from the +X axis.
///
/// Returns 0.0 for the zero vector.
pub fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}
