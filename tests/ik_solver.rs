use glam::Vec2;
use sapling::{Chain, FabrikSolver};

const EPSILON: f32 = 1e-4;

fn vertical_chain() -> Chain {
    Chain::builder()
        .add_joint(Vec2::new(0.0, 0.0))
        .add_joint(Vec2::new(0.0, 1.0))
        .add_joint(Vec2::new(0.0, 2.0))
        .tolerance(0.01)
        .max_iterations(10)
        .build()
}

fn assert_close(a: Vec2, b: Vec2, epsilon: f32) {
    assert!(
        (a - b).length() <= epsilon,
        "{:?} not within {} of {:?}",
        a,
        epsilon,
        b
    );
}

#[test]
fn unreachable_target_extends_segment_by_segment() {
    let mut chain = vertical_chain();
    let result = FabrikSolver::solve(&mut chain, Vec2::new(3.0, 0.0));

    assert!(!result.converged);
    assert_close(chain.joints()[0].position, Vec2::new(0.0, 0.0), EPSILON);
    assert_close(chain.joints()[1].position, Vec2::new(1.0, 0.0), EPSILON);
    assert_close(chain.joints()[2].position, Vec2::new(2.0, 0.0), EPSILON);
    assert!((result.final_distance - 1.0).abs() <= EPSILON);
}

#[test]
fn far_target_leaves_chain_collinear_and_monotone() {
    let mut chain = vertical_chain();
    let target = Vec2::new(4.0, 0.0); // twice the reach
    FabrikSolver::solve(&mut chain, target);

    let root = chain.joints()[0].position;
    let axis = (target - root).normalize_or_zero();
    let mut previous = -1.0;
    for joint in chain.joints() {
        let offset = joint.position - root;
        assert!(offset.perp_dot(axis).abs() <= EPSILON, "joint off axis");
        let along = offset.dot(axis);
        assert!(along > previous, "joints not monotone along the axis");
        previous = along;
    }
}

#[test]
fn root_stays_pinned() {
    let mut chain = vertical_chain();
    FabrikSolver::solve(&mut chain, Vec2::new(1.0, 1.2));
    assert_eq!(chain.joints()[0].position, Vec2::new(0.0, 0.0));
}

#[test]
fn solve_anchored_overrides_root() {
    let mut chain = vertical_chain();
    let root = Vec2::new(0.5, 0.0);
    FabrikSolver::solve_anchored(&mut chain, Vec2::new(1.0, 1.0), root);
    assert_eq!(chain.joints()[0].position, root);
}

#[test]
fn segment_lengths_survive_a_solve() {
    let mut chain = Chain::builder()
        .add_joint(Vec2::new(0.0, 0.0))
        .add_joint(Vec2::new(0.0, 1.0))
        .add_joint(Vec2::new(0.0, 2.0))
        .add_joint(Vec2::new(0.0, 2.5))
        .tolerance(0.001)
        .max_iterations(20)
        .build();
    let expected: Vec<f32> = chain.segment_lengths().to_vec();

    FabrikSolver::solve(&mut chain, Vec2::new(1.5, 1.0));

    for (i, pair) in chain.joints().windows(2).enumerate() {
        let length = (pair[1].position - pair[0].position).length();
        assert!(
            (length - expected[i]).abs() <= 1e-3,
            "segment {} drifted: {} vs {}",
            i,
            length,
            expected[i]
        );
    }
}

#[test]
fn boundary_target_converges_within_the_cap() {
    let mut chain = vertical_chain();
    // Stretch the chain flat first, then ask for the point at exactly full
    // reach along the same line.
    FabrikSolver::solve(&mut chain, Vec2::new(3.0, 0.0));
    let result = FabrikSolver::solve(&mut chain, Vec2::new(2.0, 0.0));

    assert!(result.converged);
    assert!(result.iterations <= chain.max_iterations());
    assert_close(chain.end_effector().unwrap(), Vec2::new(2.0, 0.0), 0.01);
}

#[test]
fn zero_tolerance_terminates_at_the_iteration_cap() {
    let mut chain = Chain::builder()
        .add_joint(Vec2::new(0.0, 0.0))
        .add_joint(Vec2::new(0.0, 1.0))
        .add_joint(Vec2::new(0.0, 2.0))
        .tolerance(0.0)
        .max_iterations(10)
        .build();

    let result = FabrikSolver::solve(&mut chain, Vec2::new(1.0, 0.5));
    assert_eq!(result.iterations, 10);
}

#[test]
fn second_solve_with_same_target_changes_nothing() {
    let mut chain = vertical_chain();
    let target = Vec2::new(1.2, 0.8);

    let first = FabrikSolver::solve(&mut chain, target);
    assert!(first.converged);
    let settled: Vec<Vec2> = chain.positions().collect();

    let second = FabrikSolver::solve(&mut chain, target);
    assert_eq!(second.iterations, 0);
    for (joint, before) in chain.joints().iter().zip(&settled) {
        assert_eq!(joint.position, *before);
    }
}

#[test]
fn collapsed_segments_do_not_produce_nan() {
    // Both joints on the same spot: every direction in the solve is
    // degenerate and must fall back to zero displacement.
    let mut chain = Chain::builder()
        .add_joint(Vec2::new(0.0, 0.0))
        .add_joint(Vec2::new(0.0, 0.0))
        .tolerance(0.01)
        .max_iterations(10)
        .build();

    FabrikSolver::solve(&mut chain, Vec2::new(1.0, 0.0));
    for joint in chain.joints() {
        assert!(joint.position.is_finite());
        assert_eq!(joint.position, Vec2::new(0.0, 0.0));
    }
}

#[test]
fn target_on_root_collapses_chain_without_nan() {
    let mut chain = Chain::builder()
        .add_joint(Vec2::new(0.0, 0.0))
        .add_joint(Vec2::new(1.0, 0.0))
        .tolerance(0.01)
        .max_iterations(10)
        .build();

    let result = FabrikSolver::solve(&mut chain, Vec2::new(0.0, 0.0));
    assert!(result.converged);
    for joint in chain.joints() {
        assert!(joint.position.is_finite());
    }
    assert_close(chain.end_effector().unwrap(), Vec2::new(0.0, 0.0), EPSILON);
}

#[test]
fn orientation_pass_skips_the_last_joint() {
    let mut chain = vertical_chain();
    chain.joints_mut()[2].rotation = 123.0;

    FabrikSolver::solve(&mut chain, Vec2::new(1.5, 0.5));

    let joints = chain.joints();
    let expected = {
        let dir = joints[1].position - joints[0].position;
        dir.y.atan2(dir.x).to_degrees()
    };
    assert!((joints[0].rotation - expected).abs() <= EPSILON);
    assert_eq!(joints[2].rotation, 123.0);
}

#[test]
fn extension_branch_leaves_rotations_untouched() {
    let mut chain = vertical_chain();
    for (i, joint) in chain.joints_mut().iter_mut().enumerate() {
        joint.rotation = 11.0 * (i + 1) as f32;
    }

    FabrikSolver::solve(&mut chain, Vec2::new(5.0, 0.0));

    for (i, joint) in chain.joints().iter().enumerate() {
        assert_eq!(joint.rotation, 11.0 * (i + 1) as f32);
    }
}

#[test]
fn short_chains_are_a_no_op() {
    let mut empty = Chain::builder().build();
    let result = FabrikSolver::solve(&mut empty, Vec2::new(1.0, 1.0));
    assert!(result.converged);
    assert_eq!(result.iterations, 0);
    assert!(empty.end_effector().is_none());

    let mut single = Chain::builder().add_joint(Vec2::new(2.0, 3.0)).build();
    let result = FabrikSolver::solve(&mut single, Vec2::new(5.0, 5.0));
    assert!(result.converged);
    assert_eq!(single.joints()[0].position, Vec2::new(2.0, 3.0));
}
