#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_breakdown_consistent, assert_forces_valid, assert_outcome_within};

pub use fixtures::*;
