use serde::{Deserialize, Serialize};

use crate::components::{BoardConfig, Craft, FlowState, Part, PartOutputs, RiderConfig};
use crate::resources::LiftPointPolicy;
use crate::utils::MIN_LIFT_FOR_CP;

/// Every additive term of the whole-craft drag (N).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragBreakdown {
    pub rider: f64,
    pub board_hull: f64,
    pub board_aero: f64,
    pub wing: f64,
    pub stabilizer: f64,
    pub mast: f64,
    pub fuselage: f64,
    /// Junction drag of all parts
    pub junction: f64,
    /// Mast spray drag
    pub spray: f64,
}

impl DragBreakdown {
    pub fn board(&self) -> f64 {
        self.board_hull + self.board_aero
    }

    /// Profile, friction and induced drag of the four parts.
    pub fn parts(&self) -> f64 {
        self.wing + self.stabilizer + self.mast + self.fuselage
    }

    pub fn total(&self) -> f64 {
        self.rider + self.board() + self.parts() + self.junction + self.spray
    }
}

/// Outputs of the four parts from a single evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartForces {
    pub wing: PartOutputs,
    pub stabilizer: PartOutputs,
    pub mast: PartOutputs,
    pub fuselage: PartOutputs,
}

impl PartForces {
    /// Outputs in the same order as `Craft::parts`.
    pub fn all(&self) -> [&PartOutputs; 4] {
        [&self.wing, &self.stabilizer, &self.mast, &self.fuselage]
    }
}

/// Whole-craft forces after one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftForces {
    /// Vertical lift of wing, stabilizer and fuselage (N)
    pub lift: f64,
    pub drag: DragBreakdown,
    /// Mast side force (N)
    pub side_force: f64,
    pub parts: PartForces,
}

impl CraftForces {
    pub fn total_drag(&self) -> f64 {
        self.drag.total()
    }
}

pub fn rider_drag(air: &FlowState, rider: &RiderConfig) -> f64 {
    air.dynamic_pressure() * rider.cda
}

/// Hull drag while planing, fading exponentially once the foil lifts the board.
pub fn board_hull_drag(board: &BoardConfig, velocity: f64) -> f64 {
    let k = board.hull_drag_factor;
    let vt = board.transition_speed;
    if velocity <= vt {
        k * velocity * velocity
    } else {
        k * vt * vt * (-(velocity - vt) / board.decay_speed.max(1e-6)).exp()
    }
}

pub fn board_aero_drag(air: &FlowState, board: &BoardConfig) -> f64 {
    air.dynamic_pressure() * board.cda
}

/// Sums freshly evaluated part outputs with the rider and board drag.
pub(crate) fn craft_forces(craft: &Craft, parts: PartForces) -> CraftForces {
    let ctx = craft.context();
    let PartForces {
        wing,
        stabilizer,
        mast,
        fuselage,
    } = parts;

    let drag = DragBreakdown {
        rider: rider_drag(&ctx.air, &craft.rider),
        board_hull: board_hull_drag(&craft.board, ctx.flow.velocity()),
        board_aero: board_aero_drag(&ctx.air, &craft.board),
        wing: wing.drag,
        stabilizer: stabilizer.drag,
        mast: mast.drag,
        fuselage: fuselage.drag,
        junction: wing.junction_drag
            + stabilizer.junction_drag
            + mast.junction_drag
            + fuselage.junction_drag,
        spray: mast.spray_drag,
    };

    let lift = craft
        .parts()
        .iter()
        .zip(parts.all())
        .filter(|(part, _)| part.kind.carries_load())
        .map(|(_, out)| out.lift)
        .sum();

    CraftForces {
        lift,
        drag,
        side_force: mast.lift,
        parts,
    }
}

/// Quarter chord of the MAC, positive aft of the mast (m).
pub fn aerodynamic_center(part: &Part) -> f64 {
    let props = part.properties();
    part.xpos() + props.x_mac + 0.25 * props.mac
}

/// Longitudinal position where the part's lift acts (m).
pub fn lift_point(part: &Part, outputs: &PartOutputs, policy: LiftPointPolicy) -> f64 {
    let ac = aerodynamic_center(part);
    match policy {
        LiftPointPolicy::AerodynamicCenter => ac,
        LiftPointPolicy::CenterOfLift => {
            if outputs.lift.abs() < MIN_LIFT_FOR_CP {
                ac
            } else {
                ac - outputs.moment / outputs.lift
            }
        }
    }
}
