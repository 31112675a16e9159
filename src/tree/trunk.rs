use crate::ik::{Chain, FabrikSolver, Joint, SolveResult};
use glam::Vec2;

/// The trunk: a ladder of evenly spaced joints climbing from the base,
/// solved as one IK chain towards the tree top.
#[derive(Debug, Clone)]
pub struct Trunk {
    base: Vec2,
    chain: Chain,
    top_rest: Vec2,
}

impl Trunk {
    /// Lay out `joint_count` joints over `height` above `base` and build the
    /// chain from them. The first joint sits one step above the base; the
    /// tree top rests on the last joint.
    pub fn new(
        base: Vec2,
        joint_count: usize,
        height: f32,
        tolerance: f32,
        max_iterations: u32,
    ) -> Self {
        let step = height / joint_count as f32;
        let mut builder = Chain::builder()
            .tolerance(tolerance)
            .max_iterations(max_iterations);

        let mut position = base;
        for _ in 0..joint_count {
            position += Vec2::Y * step;
            builder = builder.add_joint(position);
        }
        let chain = builder.build();
        let top_rest = chain.end_effector().unwrap_or(base);

        Self {
            base,
            chain,
            top_rest,
        }
    }

    /// Re-solve the chain so the end effector chases `target`.
    pub fn solve_towards(&mut self, target: Vec2) -> SolveResult {
        FabrikSolver::solve(&mut self.chain, target)
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    /// Rest position of the tree top, the last joint's initial spot.
    pub fn top_rest(&self) -> Vec2 {
        self.top_rest
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn joints(&self) -> &[Joint] {
        self.chain.joints()
    }

    /// Points for a line renderer: the base followed by every joint, root to
    /// tip.
    pub fn polyline(&self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::once(self.base).chain(self.chain.positions())
    }
}
