use std::f64::consts::PI;
use tracing::{info, trace, warn};

use super::{Vpp, VppGoal, VppOutcome};
use crate::components::Craft;
use crate::utils::deg_to_rad;

/// Outcome of the mast side-force fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleReport {
    pub passes: usize,
    pub converged: bool,
}

impl Vpp {
    /// Finds the pitch at which the foils carry `load` at `speed`.
    ///
    /// The search starts from the craft's current pitch. On success the mast
    /// is re-trimmed once for the side load of the resulting drag.
    pub fn steady_flight_at_given_speed(
        &self,
        craft: &mut Craft,
        speed: f64,
        load: f64,
    ) -> VppOutcome {
        let mut outcome = self.trim_pitch(craft, speed, load);
        if outcome.success {
            self.settle_mast(craft);
            let forces = craft.evaluate();
            outcome.lift = forces.lift;
            outcome.drag = forces.total_drag();
        } else {
            warn!(
                speed,
                load,
                pitch = outcome.pitch,
                lift = outcome.lift,
                "{}",
                outcome.message
            );
        }
        outcome
    }

    /// Pivoting search on the sign of `lift - load`.
    pub(crate) fn trim_pitch(&self, craft: &mut Craft, speed: f64, load: f64) -> VppOutcome {
        let cfg = &self.config;
        craft.set_speed(speed);
        craft.set_load(load);

        let mut pitch = cfg.clamp_pitch(craft.state().pitch);
        let mut step = cfg.pitch_step;
        let mut last_direction = 0.0;
        let mut iterations = 0;
        let mut converged = false;
        let mut pinned = false;

        loop {
            craft.set_pitch(pitch);
            let lift = craft.total_lift();
            let direction = if lift < load { 1.0 } else { -1.0 };
            if last_direction != 0.0 && direction != last_direction {
                step *= 0.5;
            }
            last_direction = direction;
            trace!(iterations, pitch, lift, step, "trim step");

            if step < cfg.min_pitch_step {
                converged = true;
                break;
            }
            if iterations >= cfg.max_iterations {
                break;
            }
            let next = cfg.clamp_pitch(pitch + direction * step);
            if next == pitch {
                pinned = true;
                break;
            }
            pitch = next;
            iterations += 1;
        }

        craft.set_pitch(pitch);
        let forces = craft.evaluate();
        let error = forces.lift - load;
        let within = error.abs() <= cfg.lift_tolerance * load;
        let success = converged && within;

        let message = if success {
            "converged".to_string()
        } else if pinned {
            format!("pitch pinned at {pitch:.2}° with lift error {error:.1} N")
        } else if !converged {
            format!("no convergence after {iterations} iterations")
        } else {
            format!("lift error {error:.1} N exceeds tolerance")
        };

        VppOutcome {
            goal: VppGoal::SteadyFlight,
            success,
            speed,
            pitch,
            lift: forces.lift,
            drag: forces.total_drag(),
            load,
            iterations,
            message,
        }
    }

    /// Pitch of least total drag at `speed`, searched from the current pitch.
    pub fn find_aoa_of_min_drag(&self, craft: &mut Craft, speed: f64) -> VppOutcome {
        let cfg = &self.config;
        craft.set_speed(speed);

        let mut pitch = cfg.clamp_pitch(craft.state().pitch);
        craft.set_pitch(pitch);
        let mut best = craft.total_drag();
        let mut step = cfg.pitch_step;
        let mut direction = 1.0;
        let mut iterations = 0;

        while step >= cfg.min_pitch_step && iterations < cfg.max_iterations {
            iterations += 1;
            let candidate = cfg.clamp_pitch(pitch + direction * step);
            if candidate == pitch {
                direction = -direction;
                step *= 0.5;
                continue;
            }
            craft.set_pitch(candidate);
            let drag = craft.total_drag();
            trace!(iterations, candidate, drag, best, "min drag step");
            if drag < best {
                best = drag;
                pitch = candidate;
            } else {
                direction = -direction;
                step *= 0.5;
            }
        }

        craft.set_pitch(pitch);
        let forces = craft.evaluate();
        let success = step < cfg.min_pitch_step;
        let message = if success {
            "converged".to_string()
        } else {
            warn!(speed, pitch, "min drag search hit the iteration cap");
            format!("no convergence after {iterations} iterations")
        };

        VppOutcome {
            goal: VppGoal::MinDragPitch,
            success,
            speed,
            pitch,
            lift: forces.lift,
            drag: forces.total_drag(),
            load: craft.state().load,
            iterations,
            message,
        }
    }

    /// Turns the mast until its side force matches the drive's side load.
    ///
    /// Mast drag feeds back into the drive, so this iterates to a fixed point.
    /// Hitting the pass ceiling leaves the last completed pass in place.
    pub fn settle_mast(&self, craft: &mut Craft) -> SettleReport {
        let ratio = craft.drive.side_load_ratio;
        if ratio <= 0.0 {
            return SettleReport {
                passes: 0,
                converged: true,
            };
        }

        // Thin-airfoil lift slope per degree.
        let slope = deg_to_rad(2.0 * PI);
        let max_passes = self.config.max_settle_passes;

        for pass in 1..=max_passes {
            let forces = craft.evaluate();
            let mast = forces.parts.mast;
            let q_area = craft.context().flow.dynamic_pressure() * mast.area;
            if q_area <= 0.0 {
                return SettleReport {
                    passes: pass,
                    converged: true,
                };
            }

            let required = ratio * forces.total_drag() / q_area;
            let aoa = craft.mast.aoa();
            let next = aoa + (required - mast.cl) / slope;
            craft.mast.set_aoa(next);
            trace!(pass, aoa, next, required, "mast settle pass");

            if (next - aoa).abs() < self.config.settle_tolerance {
                craft.evaluate();
                return SettleReport {
                    passes: pass,
                    converged: true,
                };
            }
        }

        warn!(
            passes = max_passes,
            aoa = craft.mast.aoa(),
            "mast settle reached its pass ceiling"
        );
        craft.evaluate();
        SettleReport {
            passes: max_passes,
            converged: false,
        }
    }

    pub(crate) fn log_outcome(outcome: &VppOutcome) {
        if outcome.success {
            info!(
                goal = ?outcome.goal,
                speed = outcome.speed,
                pitch = outcome.pitch,
                drag = outcome.drag,
                "vpp solution"
            );
        } else {
            warn!(goal = ?outcome.goal, "{}", outcome.message);
        }
    }
}
