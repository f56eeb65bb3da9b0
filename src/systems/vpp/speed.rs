use tracing::{debug, trace, warn};

use super::{Vpp, VppGoal, VppOutcome};
use crate::components::Craft;

impl Vpp {
    /// Lowest speed at which the craft trims to `load` within `max_drag`.
    ///
    /// On success the craft is left in the state of the best trim found.
    pub fn find_min_takeoff_v(&self, craft: &mut Craft, load: f64, max_drag: f64) -> VppOutcome {
        let cfg = &self.config;
        let mut speed = cfg.clamp_speed(cfg.takeoff_seed_speed);
        let mut step = cfg.speed_step;
        let mut last_direction = 0.0;
        let mut iterations = 0;
        let mut best: Option<(VppOutcome, Craft)> = None;

        let last = loop {
            let trim = self.steady_flight_at_given_speed(craft, speed, load);
            let feasible = trim.success && trim.drag <= max_drag;
            trace!(speed, feasible, drag = trim.drag, step, "takeoff step");
            if feasible && best.as_ref().map_or(true, |(b, _)| speed < b.speed) {
                best = Some((trim.clone(), craft.clone()));
            }

            let direction = if feasible { -1.0 } else { 1.0 };
            if last_direction != 0.0 && direction != last_direction {
                step *= 0.5;
            }
            last_direction = direction;

            if step < cfg.min_speed_step || iterations >= cfg.max_iterations {
                break trim;
            }
            let next = cfg.clamp_speed(speed + direction * step);
            if next == speed {
                break trim;
            }
            speed = next;
            iterations += 1;
        };

        let outcome = match best {
            Some((trim, snapshot)) => {
                *craft = snapshot;
                VppOutcome {
                    goal: VppGoal::Takeoff,
                    iterations,
                    message: "converged".to_string(),
                    ..trim
                }
            }
            None => VppOutcome {
                goal: VppGoal::Takeoff,
                success: false,
                iterations,
                message: format!("no speed up to {:.1} m/s carries the load", cfg.speed_range.1),
                ..last
            },
        };
        Self::log_outcome(&outcome);
        outcome
    }

    /// Fastest speed that still carries `min_lift` without exceeding `max_drag`.
    ///
    /// Marches up from the low speed at the low-speed minimum-drag pitch,
    /// trimming down whenever lift already exceeds the load, until drag runs
    /// out. Then walks speed back down, sweeping pitch up at each speed until
    /// lift reaches `min_lift` or drag runs out again.
    pub fn max_speed(
        &self,
        craft: &mut Craft,
        load: f64,
        min_lift: f64,
        max_drag: f64,
    ) -> VppOutcome {
        let cfg = &self.config;
        craft.set_load(load);
        let low = cfg.clamp_speed(cfg.low_speed);
        let min_drag_pitch = self.find_aoa_of_min_drag(craft, low).pitch;
        debug!(low, min_drag_pitch, "max speed march start");

        let mut start_pitch = min_drag_pitch;
        let mut top = cfg.speed_range.1;
        let mut iterations = 0;
        for i in 0.. {
            let speed = low + i as f64 * cfg.march_step;
            if speed > cfg.speed_range.1 + 1e-9 || iterations >= cfg.max_iterations {
                break;
            }
            iterations += 1;
            craft.set_speed(speed);
            craft.set_pitch(min_drag_pitch);
            let forces = craft.evaluate();
            start_pitch = min_drag_pitch;
            let mut drag = forces.total_drag();
            if forces.lift > load {
                let trim = self.steady_flight_at_given_speed(craft, speed, load);
                start_pitch = trim.pitch;
                drag = trim.drag;
            }
            trace!(speed, drag, start_pitch, "max speed march");
            if drag > max_drag {
                top = speed;
                break;
            }
        }

        let mut last = None;
        for i in 0.. {
            let speed = top - i as f64 * cfg.march_step;
            if speed < cfg.speed_range.0 - 1e-9 || iterations >= cfg.max_iterations {
                break;
            }
            iterations += 1;
            craft.set_speed(speed);
            let mut pitch = start_pitch;
            while pitch <= cfg.pitch_range.1 {
                craft.set_pitch(pitch);
                let forces = craft.evaluate();
                let drag = forces.total_drag();
                if drag > max_drag {
                    break;
                }
                if forces.lift >= min_lift {
                    let outcome = VppOutcome {
                        goal: VppGoal::MaxSpeed,
                        success: true,
                        speed,
                        pitch,
                        lift: forces.lift,
                        drag,
                        load,
                        iterations,
                        message: "converged".to_string(),
                    };
                    Self::log_outcome(&outcome);
                    return outcome;
                }
                last = Some((speed, pitch, forces));
                pitch += cfg.pitch_sweep_step;
            }
        }

        let mut outcome = match last {
            Some((speed, pitch, forces)) => VppOutcome {
                goal: VppGoal::MaxSpeed,
                success: false,
                speed,
                pitch,
                lift: forces.lift,
                drag: forces.total_drag(),
                load,
                iterations,
                message: String::new(),
            },
            None => self.failed(craft, VppGoal::MaxSpeed),
        };
        outcome.iterations = iterations;
        outcome.message =
            format!("no speed reaches {min_lift:.0} N within {max_drag:.0} N of drag");
        Self::log_outcome(&outcome);
        outcome
    }

    /// Speed of least drag in steady flight at `load`, capped by `max_drag`.
    ///
    /// Starts from the cruise seed, moving up until a trim succeeds, then
    /// walks speed toward lower trimmed drag. The craft is left at the best
    /// trim.
    pub fn easy_ride(&self, craft: &mut Craft, load: f64, max_drag: f64) -> VppOutcome {
        let cfg = &self.config;
        let mut speed = cfg.clamp_speed(cfg.cruise_seed_speed);
        let mut trim = self.steady_flight_at_given_speed(craft, speed, load);
        let mut iterations = 0;
        while !trim.success && speed < cfg.speed_range.1 && iterations < cfg.max_iterations {
            speed = cfg.clamp_speed(speed + cfg.speed_step);
            trim = self.steady_flight_at_given_speed(craft, speed, load);
            iterations += 1;
        }
        if !trim.success {
            let outcome = VppOutcome {
                goal: VppGoal::EasyRide,
                iterations,
                message: "no trimmed speed found".to_string(),
                ..trim
            };
            Self::log_outcome(&outcome);
            return outcome;
        }

        let mut best = (trim, craft.clone());
        let mut step = cfg.speed_step;
        let mut direction = 1.0;
        while step >= cfg.min_speed_step && iterations < cfg.max_iterations {
            iterations += 1;
            let candidate = cfg.clamp_speed(speed + direction * step);
            if candidate == speed {
                direction = -direction;
                step *= 0.5;
                continue;
            }
            craft.set_pitch(best.0.pitch);
            let trial = self.steady_flight_at_given_speed(craft, candidate, load);
            trace!(candidate, drag = trial.drag, best = best.0.drag, "easy ride step");
            if trial.success && trial.drag < best.0.drag && trial.drag <= max_drag {
                speed = candidate;
                best = (trial, craft.clone());
            } else {
                direction = -direction;
                step *= 0.5;
            }
        }

        let (trim, snapshot) = best;
        *craft = snapshot;
        let success = trim.drag <= max_drag;
        let message = if success {
            "converged".to_string()
        } else {
            format!("least drag {:.1} N exceeds {max_drag:.0} N", trim.drag)
        };
        let outcome = VppOutcome {
            goal: VppGoal::EasyRide,
            success,
            iterations,
            message,
            ..trim
        };
        Self::log_outcome(&outcome);
        outcome
    }

    fn failed(&self, craft: &mut Craft, goal: VppGoal) -> VppOutcome {
        let forces = craft.evaluate();
        warn!(?goal, "search produced no evaluations");
        VppOutcome {
            goal,
            success: false,
            speed: craft.speed(),
            pitch: craft.state().pitch,
            lift: forces.lift,
            drag: forces.total_drag(),
            load: craft.state().load,
            iterations: 0,
            message: String::new(),
        }
    }
}
