//! Closed-form rider position for pitch equilibrium.
//!
//! Moments are taken about the mast/fuselage junction in the craft frame
//! (x aft, z up), nose-up positive, with every arm rotated by the craft pitch.
//! Offsets are reported positive forward of the mast.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::forces::{lift_point, CraftForces};
use crate::components::{Craft, Part, PartOutputs};
use crate::resources::LiftPointPolicy;
use crate::utils::{deg_to_rad, pitch_rotate, MIN_LOAD};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// Net nose-up moment of everything but the rider's weight (N·m)
    pub net_moment: f64,
    /// Drive force balancing the total drag (N)
    pub drive_force: f64,
    /// Rider CG ahead of the mast, measured horizontally (m)
    pub fuselage_offset: f64,
    /// Rider CG ahead of the mast, measured along the deck (m)
    pub deck_offset: f64,
    /// Lean into the rider's own aerodynamic drag (m)
    pub drag_posture: f64,
    /// Lean against a drive carried by the body (m)
    pub drive_posture: f64,
}

impl BalanceResult {
    /// Deck offset including both posture corrections.
    pub fn stance(&self) -> f64 {
        self.deck_offset + self.drag_posture + self.drive_posture
    }
}

/// Nose-up moment of a horizontal (aft) and vertical (up) force at a body point.
fn moment(point: Vector2<f64>, pitch: f64, aft: f64, up: f64) -> f64 {
    let world = pitch_rotate(point, pitch);
    world.y * aft - world.x * up
}

fn surface_moment(part: &Part, out: &PartOutputs, craft: &Craft, pitch: f64) -> f64 {
    let policy = craft.context().model.lift_point;
    let x = lift_point(part, out, policy);
    let at = Vector2::new(x, part.zpos());
    let mut total = moment(at, pitch, out.drag + out.junction_drag, out.lift);
    if policy == LiftPointPolicy::AerodynamicCenter {
        total += out.moment;
    }
    total
}

/// Rider offsets that zero the pitching moment, given the forces of the
/// craft's current state.
pub(crate) fn balance(craft: &Craft, forces: &CraftForces) -> BalanceResult {
    let state = craft.state();
    let pitch = deg_to_rad(state.pitch);
    let load = state.load.max(MIN_LOAD);
    let parts = &forces.parts;

    let mut net = 0.0;
    for (part, out) in [
        (&craft.wing, &parts.wing),
        (&craft.stabilizer, &parts.stabilizer),
        (&craft.fuselage, &parts.fuselage),
    ] {
        net += surface_moment(part, out, craft, pitch);
    }

    // Mast drag acts halfway up the wetted length, spray at the waterline.
    let mast = &parts.mast;
    let mast_x = craft.mast.xpos() + 0.25 * craft.mast.chord();
    let mast_base = craft.mast.zpos();
    let wetted = state.submersion.clamp(0.0, 1.0) * craft.mast.span();
    net += moment(Vector2::new(mast_x, mast_base + 0.5 * wetted), pitch, mast.drag, 0.0);
    net += moment(Vector2::new(mast_x, mast_base), pitch, mast.junction_drag, 0.0);
    net += moment(Vector2::new(mast_x, mast_base + wetted), pitch, mast.spray_drag, 0.0);

    let deck = mast_base + craft.mast.span();
    let board_at = Vector2::new(craft.board.xpos, deck);
    net += moment(board_at, pitch, forces.drag.board(), -craft.board.weight);
    net += moment(
        Vector2::new(craft.rig.xpos, deck + craft.rig.height),
        pitch,
        0.0,
        -craft.rig.weight,
    );

    let cg_height = craft.rider.cg_height;
    net += moment(Vector2::new(0.0, deck + cg_height), pitch, forces.drag.rider, 0.0);

    let drive_force = forces.total_drag();
    net += moment(
        Vector2::new(0.0, deck + craft.drive.height),
        pitch,
        -drive_force,
        0.0,
    );

    let fuselage_offset = net / load;
    let height = deck + cg_height;
    let deck_offset = (fuselage_offset + height * pitch.sin()) / pitch.cos();

    BalanceResult {
        net_moment: net,
        drive_force,
        fuselage_offset,
        deck_offset,
        drag_posture: -forces.drag.rider * cg_height / load,
        drive_posture: if craft.drive.through_rider {
            drive_force * craft.drive.height / load
        } else {
            0.0
        },
    }
}
