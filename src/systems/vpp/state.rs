use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::KMH_PER_MS;

/// Which question a VPP search answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VppGoal {
    SteadyFlight,
    MinDragPitch,
    Takeoff,
    MaxSpeed,
    EasyRide,
}

/// Result of one VPP search.
///
/// On failure the numbers describe the last evaluated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VppOutcome {
    pub goal: VppGoal,
    pub success: bool,
    /// m/s
    pub speed: f64,
    /// deg
    pub pitch: f64,
    /// N
    pub lift: f64,
    /// N
    pub drag: f64,
    /// Target load (N)
    pub load: f64,
    pub iterations: usize,
    pub message: String,
}

impl VppOutcome {
    pub fn speed_kmh(&self) -> f64 {
        self.speed * KMH_PER_MS
    }

    /// Lift over drag.
    pub fn glide_ratio(&self) -> f64 {
        if self.drag > 0.0 {
            self.lift / self.drag
        } else {
            0.0
        }
    }
}

impl fmt::Display for VppOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "ok" } else { "FAILED" };
        write!(
            f,
            "{:?} [{status}]: {:.2} m/s ({:.1} km/h), pitch {:.2}°, ",
            self.goal,
            self.speed,
            self.speed_kmh(),
            self.pitch,
        )?;
        write!(
            f,
            "lift {:.1} N, drag {:.1} N ({})",
            self.lift, self.drag, self.message
        )
    }
}
