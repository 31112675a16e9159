//! Inverse Kinematics module
//!
//! This module contains the core IK types and the FABRIK solver
//! implementation for planar joint chains.

pub mod chain;
pub mod joint;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use joint::Joint;
pub use solver::{FabrikSolver, SolveResult};
