pub mod balance;
pub mod flow;
pub mod forces;
pub mod sweep;
pub mod vpp;

pub use balance::BalanceResult;
pub use flow::{evaluate_part, EvalContext, WingWake};
pub use forces::{CraftForces, DragBreakdown, PartForces};
pub use sweep::{drag_vs_speed, lift_vs_pitch, linspace, SweepPoint};
pub use vpp::{SettleReport, Vpp, VppGoal, VppOutcome};
