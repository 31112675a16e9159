//! # sapling
//!
//! A physically-animated 2D tree toy: a FABRIK-solved trunk that sways after
//! a spring-mounted tree top, and apples that can be grabbed, pulled off,
//! and dropped on a goal.
//!
//! ## Features
//! - FABRIK (Forward And Backward Reaching Inverse Kinematics) solver for
//!   planar joint chains
//! - Frame-rate independent spring / simple rigid body dynamics
//! - Headless tree simulation: grab, pull, snap, score, respawn
//! - Narrow input and audio boundaries; no engine or rendering dependencies
//!
//! ## Example
//! ```rust,ignore
//! use glam::Vec2;
//! use sapling::{CursorInput, Tree, TreeConfig};
//!
//! let mut tree = Tree::new(TreeConfig::default());
//! let input = CursorInput::new(Vec2::new(0.5, 3.0), false);
//! for _ in 0..60 {
//!     for event in tree.tick(1.0 / 60.0, input) {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod audio;
pub mod cursor;
pub mod dynamics;
pub mod ik;
pub mod math;
pub mod tree;

pub use audio::{AudioSink, NullAudio, Sfx};
pub use cursor::CursorInput;
pub use dynamics::{Body, Spring};
pub use ik::{Chain, ChainBuilder, FabrikSolver, Joint, SolveResult};
pub use tree::{Apple, AppleConfig, Tree, TreeConfig, TreeEvent, Trunk};
