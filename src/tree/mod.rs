//! Headless tree simulation
//!
//! A trunk whose joints are solved by FABRIK towards a spring-mounted tree
//! top, and apples that can be grabbed, pulled off, and dropped on a goal.

pub mod apple;
pub mod behaviour;
pub mod trunk;

pub use apple::{Apple, AppleConfig, AppleEvent};
pub use behaviour::{Tree, TreeConfig, TreeEvent};
pub use trunk::Trunk;
