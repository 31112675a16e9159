use super::joint::Joint;
use glam::Vec2;

/// An ordered chain of joints connected by fixed-length segments.
///
/// Joint 0 is the root: it stays pinned in world space while the solver
/// works. Segment lengths are measured once when the chain is built and
/// never change afterwards.
#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) joints: Vec<Joint>,
    pub(crate) segment_lengths: Vec<f32>,
    pub(crate) total_length: f32,
    pub(crate) tolerance: f32,
    pub(crate) max_iterations: u32,
    /// Working buffer for the solver; committed back to `joints` after the
    /// iteration loop ends.
    pub(crate) scratch: Vec<Vec2>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joints_mut(&mut self) -> &mut [Joint] {
        &mut self.joints
    }

    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn end_effector(&self) -> Option<Vec2> {
        self.joints.last().map(|j| j.position)
    }

    pub fn root(&self) -> Option<Vec2> {
        self.joints.first().map(|j| j.position)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.joints.iter().map(|j| j.position)
    }
}

pub struct ChainBuilder {
    joints: Vec<Joint>,
    tolerance: f32,
    max_iterations: u32,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            joints: Vec::new(),
            tolerance: 0.01,
            max_iterations: 10,
        }
    }

    pub fn add_joint(mut self, position: Vec2) -> Self {
        self.joints.push(Joint::new(position));
        self
    }

    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Measure the segment lengths between consecutive joints and freeze
    /// them. A chain with fewer than two joints gets an empty segment table
    /// and solving it is a silent no-op.
    pub fn build(self) -> Chain {
        let segment_lengths = self.calculate_segment_lengths();
        let total_length = segment_lengths.iter().sum();
        let scratch = Vec::with_capacity(self.joints.len());
        Chain {
            joints: self.joints,
            segment_lengths,
            total_length,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            scratch,
        }
    }

    fn calculate_segment_lengths(&self) -> Vec<f32> {
        if self.joints.len() < 2 {
            return Vec::new();
        }

        self.joints
            .windows(2)
            .map(|w| (w[1].position - w[0].position).length())
            .collect()
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
