use super::chain::Chain;
use crate::math::angle_of;
use glam::Vec2;

#[derive(Debug, Clone, Copy)]
pub struct SolveResult {
    pub converged: bool,
    pub iterations: u32,
    pub final_distance: f32,
}

impl SolveResult {
    fn noop() -> Self {
        Self {
            converged: true,
            iterations: 0,
            final_distance: 0.0,
        }
    }
}

pub struct FabrikSolver;

impl FabrikSolver {
    /// Solve towards `target`, keeping the root where it currently is.
    pub fn solve(chain: &mut Chain, target: Vec2) -> SolveResult {
        if chain.joints.is_empty() {
            return SolveResult::noop();
        }

        let root = chain.joints[0].position;
        Self::solve_anchored(chain, target, root)
    }

    /// Solve towards `target` with the first joint pinned to `root`.
    ///
    /// A chain with fewer than two joints is left untouched. When the target
    /// is out of reach the chain extends towards it segment by segment; no
    /// orientation pass runs on that branch. Otherwise FABRIK iterates until
    /// the end effector is within tolerance of the target or the iteration
    /// cap is hit, and the best-effort result is committed either way.
    pub fn solve_anchored(chain: &mut Chain, target: Vec2, root: Vec2) -> SolveResult {
        let n = chain.joints.len();
        if n < 2 {
            return SolveResult::noop();
        }
        let last = n - 1;

        if (target - root).length_squared() > chain.total_length * chain.total_length {
            Self::extend_towards(chain, root, target);
            let final_distance = (chain.joints[last].position - target).length();
            return SolveResult {
                converged: false,
                iterations: 0,
                final_distance,
            };
        }

        let tolerance = chain.tolerance;
        let max_iterations = chain.max_iterations;

        chain.scratch.clear();
        chain.scratch.extend(chain.joints.iter().map(|j| j.position));

        let mut iterations = 0;
        let mut error = (chain.scratch[last] - target).length();
        while error > tolerance && iterations < max_iterations {
            // Reach from the tip: pin the end effector to the target and pull
            // the rest of the chain after it.
            chain.scratch[last] = target;
            for i in (0..last).rev() {
                let dir = (chain.scratch[i] - chain.scratch[i + 1]).normalize_or_zero();
                chain.scratch[i] = chain.scratch[i + 1] + dir * chain.segment_lengths[i];
            }

            // Reach from the root: pin the first joint back in place and
            // restore segment lengths towards the tip.
            chain.scratch[0] = root;
            for i in 0..last {
                let dir = (chain.scratch[i + 1] - chain.scratch[i]).normalize_or_zero();
                chain.scratch[i + 1] = chain.scratch[i] + dir * chain.segment_lengths[i];
            }

            error = (chain.scratch[last] - target).length();
            iterations += 1;
        }

        let converged = error <= tolerance;
        if !converged {
            log::trace!(
                "FABRIK hit the iteration cap ({}) at distance {}",
                max_iterations,
                error
            );
        }

        for (joint, position) in chain.joints.iter_mut().zip(&chain.scratch) {
            joint.position = *position;
        }

        // Orientation pass. The last joint is skipped on purpose: nothing
        // leaves it, so its angle stays whatever it was.
        for i in 0..last {
            let dir = chain.joints[i + 1].position - chain.joints[i].position;
            chain.joints[i].rotation = angle_of(dir);
        }

        SolveResult {
            converged,
            iterations,
            final_distance: error,
        }
    }

    /// Extend the chain straight out towards an unreachable target. The
    /// direction is recomputed at every joint rather than taken once from
    /// the root.
    fn extend_towards(chain: &mut Chain, root: Vec2, target: Vec2) {
        chain.joints[0].position = root;
        for i in 0..chain.joints.len() - 1 {
            let from = chain.joints[i].position;
            let dir = (target - from).normalize_or_zero();
            chain.joints[i + 1].position = from + dir * chain.segment_lengths[i];
        }
    }
}
