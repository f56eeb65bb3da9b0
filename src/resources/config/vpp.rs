use serde::{Deserialize, Serialize};

/// Configuration for the VPP searches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VppConfig {
    /// Craft pitch search range (deg)
    pub pitch_range: (f64, f64),
    /// Speed search range (m/s)
    pub speed_range: (f64, f64),
    /// Initial pitch step (deg)
    pub pitch_step: f64,
    /// Pitch searches stop once the step falls below this (deg)
    pub min_pitch_step: f64,
    /// Initial speed step (m/s)
    pub speed_step: f64,
    /// Speed searches stop once the step falls below this (m/s)
    pub min_speed_step: f64,
    /// Accepted lift error as a fraction of the load
    pub lift_tolerance: f64,
    /// Maximum number of iterations per search
    pub max_iterations: usize,
    /// Speed increment of the max-speed march (m/s)
    pub march_step: f64,
    /// Pitch increment of the max-speed sweep (deg)
    pub pitch_sweep_step: f64,
    /// Speed at which the max-speed search takes its min-drag pitch (m/s)
    pub low_speed: f64,
    /// Starting speed of the takeoff search (m/s)
    pub takeoff_seed_speed: f64,
    /// Starting speed of the easy-ride search (m/s)
    pub cruise_seed_speed: f64,
    /// Ceiling on mast re-trim passes
    pub max_settle_passes: usize,
    /// Mast re-trim converges once the AoA moves less than this (deg)
    pub settle_tolerance: f64,
}

impl Default for VppConfig {
    fn default() -> Self {
        Self {
            pitch_range: (-6.0, 14.0),
            speed_range: (1.0, 20.0),
            pitch_step: 1.0,
            min_pitch_step: 0.005,
            speed_step: 1.0,
            min_speed_step: 0.01,
            lift_tolerance: 0.01,
            max_iterations: 400,
            march_step: 0.1,
            pitch_sweep_step: 0.02,
            low_speed: 5.0,
            takeoff_seed_speed: 5.0,
            cruise_seed_speed: 6.0,
            max_settle_passes: 8,
            settle_tolerance: 0.01,
        }
    }
}

impl VppConfig {
    pub fn clamp_pitch(&self, pitch: f64) -> f64 {
        pitch.clamp(self.pitch_range.0, self.pitch_range.1)
    }

    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.clamp(self.speed_range.0, self.speed_range.1)
    }
}
