//! ECS components for the fighting demo.
//!
//! - fighter: identity tag, tuning, runtime state, hit-sensor slot

pub mod fighter;

pub use fighter::*;
