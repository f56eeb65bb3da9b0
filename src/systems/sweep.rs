//! Plot sweeps over speed or pitch.
//!
//! Each sweep runs on a clone of the craft, so the caller's craft and flow
//! are left as they were.

use serde::{Deserialize, Serialize};

use crate::components::{Craft, FlowState};
use crate::systems::forces::DragBreakdown;

/// One sample of a sweep; `x` is the swept variable (m/s or deg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub x: f64,
    pub lift: f64,
    pub drag: f64,
    pub breakdown: DragBreakdown,
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

fn prepared(craft: &Craft, flow: &FlowState) -> Craft {
    let mut working = craft.clone();
    let mut ctx = *craft.context();
    ctx.flow = *flow;
    working.set_context(ctx);
    working
}

/// Total lift and drag at fixed pitch across `speeds` (m/s).
pub fn drag_vs_speed(
    craft: &Craft,
    flow: &FlowState,
    pitch: f64,
    speeds: &[f64],
) -> Vec<SweepPoint> {
    let mut working = prepared(craft, flow);
    working.set_pitch(pitch);
    speeds
        .iter()
        .map(|&speed| {
            working.set_speed(speed);
            let forces = working.evaluate();
            SweepPoint {
                x: speed,
                lift: forces.lift,
                drag: forces.total_drag(),
                breakdown: forces.drag,
            }
        })
        .collect()
}

/// Total lift and drag at the flow's speed across `pitches` (deg).
pub fn lift_vs_pitch(craft: &Craft, flow: &FlowState, pitches: &[f64]) -> Vec<SweepPoint> {
    let mut working = prepared(craft, flow);
    working.set_speed(flow.velocity());
    pitches
        .iter()
        .map(|&pitch| {
            working.set_pitch(pitch);
            let forces = working.evaluate();
            SweepPoint {
                x: pitch,
                lift: forces.lift,
                drag: forces.total_drag(),
                breakdown: forces.drag,
            }
        })
        .collect()
}
