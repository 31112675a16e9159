use glam::Vec2;

/// A single link point of an IK chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub position: Vec2,
    /// Angle in degrees of the segment leaving this joint towards the next
    /// one, written by the solver's orientation pass. The last joint of a
    /// chain keeps whatever value it already had.
    pub rotation: f32,
}

impl Joint {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }
}
