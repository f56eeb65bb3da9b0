//! Velocity prediction: bounded searches over pitch and speed.
//!
//! Every search is a pivoting shrink-step walk: it moves by a fixed step in
//! the direction the objective asks for, halves the step and reverses when
//! that direction flips, and stops once the step drops below its floor. This
//! is not a bracketed bisection; on a multi-modal drag curve near stall it
//! can settle on a local optimum.

mod speed;
mod state;
mod trim;

pub use state::{VppGoal, VppOutcome};
pub use trim::SettleReport;

use crate::resources::VppConfig;

/// Goal solvers over a craft, configured once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vpp {
    pub config: VppConfig,
}

impl Vpp {
    pub fn new(config: VppConfig) -> Self {
        Self { config }
    }
}
