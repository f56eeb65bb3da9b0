use approx::assert_relative_eq;
use foilsim::components::{FoilQuery, PartKind};
use foilsim::utils::MIN_ASPECT_RATIO;
use rand::Rng;
use std::f64::consts::PI;

use crate::common::{
    assert_breakdown_consistent, assert_forces_valid, create_test_craft, golden_speed, seeded_rng,
};

/// Hoerner's taper term in the induced drag efficiency.
fn taper_factor(taper: f64) -> f64 {
    let l = taper - 0.093;
    (0.0524 * l.powi(4) - 0.15 * l.powi(3) + 0.1659 * l.powi(2) - 0.0706 * l + 0.0119).max(0.0)
}

#[test]
fn test_golden_total_drag() {
    let mut craft = create_test_craft();
    let v = golden_speed();
    craft.set_speed(v);
    craft.set_pitch(0.0);
    craft.set_submersion(0.6);

    let forces = craft.evaluate();
    assert_forces_valid(&forces);

    let water = craft.context().flow;
    let air = craft.context().air;
    let q = 0.5 * water.density() * v * v;
    let q_air = 0.5 * air.density() * v * v;

    let rider = q_air * craft.rider.cda;
    let board = craft.board;
    let vt = board.transition_speed;
    let hull = board.hull_drag_factor * vt * vt * (-(v - vt) / board.decay_speed).exp();
    let board_drag = hull + q_air * board.cda;

    let mut lift = 0.0;
    let mut parts = 0.0;
    let mut junction = 0.0;
    let mut spray = 0.0;
    for (part, out) in craft.parts().into_iter().zip(forces.parts.all()) {
        let props = part.properties();
        let is_mast = part.kind == PartKind::Mast;
        let fraction = if is_mast { 0.6 } else { 1.0 };
        let area = props.area * fraction;
        let span = props.span * fraction;
        let aspect_ratio = (span * span / area).max(MIN_ASPECT_RATIO);
        let reynolds = v * props.mac / water.kinematic_viscosity();

        let query =
            FoilQuery::new(out.aoa, part.thickness(), part.camber()).with_reynolds(reynolds);
        let mut cd = part.foil().coefficients(&query).cd;
        if let Some(reference) = part.foil().reference_reynolds() {
            cd *= (reference / reynolds).powf(0.11);
        }
        let mut efficiency = 1.0 / (1.0 + taper_factor(props.taper) * aspect_ratio);
        if is_mast {
            // Free surface mirrors the wetted mast.
            efficiency *= 2.0;
        }
        cd += out.cl * out.cl / (PI * aspect_ratio * efficiency);
        parts += cd * q * area;

        let t = part.thickness() / 100.0;
        let thickness = t * props.mac;
        junction += part.junctions() as f64 * (17.0 * t * t - 0.05) * thickness * thickness * q;
        if is_mast {
            spray += 0.24 * thickness * thickness * q;
        } else {
            lift += out.cl * q * area;
        }
    }

    let drag = forces.drag;
    assert_relative_eq!(drag.rider, rider, max_relative = 1e-9);
    assert_relative_eq!(drag.board(), board_drag, max_relative = 1e-9);
    assert_relative_eq!(drag.parts(), parts, max_relative = 1e-9);
    assert_relative_eq!(drag.junction, junction, max_relative = 1e-9);
    assert_relative_eq!(drag.spray, spray, max_relative = 1e-9);
    assert_relative_eq!(
        forces.total_drag(),
        rider + board_drag + parts + junction + spray,
        max_relative = 1e-9
    );
    assert_relative_eq!(forces.lift, lift, max_relative = 1e-9);
}

#[test]
fn test_golden_part_outputs() {
    let mut craft = create_test_craft();
    craft.set_speed(golden_speed());
    craft.evaluate();

    let wing = craft.wing.outputs().copied().unwrap_or_default();
    assert_relative_eq!(wing.cl, 0.577952, max_relative = 1e-3);
    assert_relative_eq!(wing.aspect_ratio, 7.44186, max_relative = 1e-4);
    assert_relative_eq!(wing.reynolds, 525735.66, max_relative = 1e-4);

    let stab = craft.stabilizer.outputs().copied().unwrap_or_default();
    assert_relative_eq!(stab.aoa, -3.332779, max_relative = 1e-3);
    assert_relative_eq!(stab.cl, -0.355451, max_relative = 1e-3);

    let mast = craft.mast.outputs().copied().unwrap_or_default();
    assert_relative_eq!(mast.area, 0.0561, epsilon = 1e-12);
    assert_relative_eq!(mast.aspect_ratio, 4.636364, max_relative = 1e-4);
    assert_relative_eq!(mast.spray_drag, 0.90033, max_relative = 1e-3);
}

#[test]
fn test_drag_public_totals_agree() {
    let mut craft = create_test_craft();
    craft.set_speed(golden_speed());
    let breakdown = craft.drag_breakdown();
    let total = craft.total_drag();
    assert_breakdown_consistent(&breakdown, total);
}

#[test]
fn test_random_states_stay_finite() {
    let mut rng = seeded_rng(42);
    let mut craft = create_test_craft();
    for _ in 0..200 {
        craft.set_speed(rng.gen_range(0.5..20.0));
        craft.set_pitch(rng.gen_range(-6.0..14.0));
        craft.set_submersion(rng.gen_range(0.05..1.0));
        let forces = craft.evaluate();
        assert_forces_valid(&forces);
    }
}

#[test]
fn test_deeper_mast_adds_drag() {
    let mut craft = create_test_craft();
    craft.set_speed(golden_speed());
    craft.set_submersion(0.3);
    let shallow = craft.drag_breakdown();
    craft.set_submersion(0.9);
    let deep = craft.drag_breakdown();
    assert!(deep.mast > shallow.mast);
    // Lift does not depend on the mast.
    craft.set_submersion(0.3);
    let lift_shallow = craft.total_lift();
    craft.set_submersion(0.9);
    assert_relative_eq!(craft.total_lift(), lift_shallow, epsilon = 1e-9);
}
