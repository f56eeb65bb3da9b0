use foilsim::systems::{drag_vs_speed, lift_vs_pitch, linspace};
use foilsim::utils::KMH_PER_MS;

use crate::common::{assert_breakdown_consistent, create_test_craft};

fn speeds_kmh(from: f64, to: f64) -> Vec<f64> {
    let n = (to - from) as usize + 1;
    linspace(from, to, n)
}

#[test]
fn test_single_interior_drag_minimum() {
    let craft = create_test_craft();
    let flow = craft.context().flow;
    let kmh = speeds_kmh(5.0, 50.0);
    let speeds: Vec<f64> = kmh.iter().map(|v| v / KMH_PER_MS).collect();
    let points = drag_vs_speed(&craft, &flow, 0.0, &speeds);
    assert_eq!(points.len(), kmh.len());

    let minima: Vec<f64> = points
        .windows(3)
        .filter(|w| w[1].drag < w[0].drag && w[1].drag < w[2].drag)
        .map(|w| w[1].x * KMH_PER_MS)
        .collect();
    assert_eq!(minima.len(), 1, "interior minima at {:?} km/h", minima);
    assert!(minima[0] > 10.0 && minima[0] < 25.0, "minimum at {} km/h", minima[0]);

    for point in &points {
        assert_breakdown_consistent(&point.breakdown, point.drag);
    }
}

#[test]
fn test_drag_grows_once_foiling() {
    let craft = create_test_craft();
    let flow = craft.context().flow;
    let speeds: Vec<f64> = speeds_kmh(25.0, 50.0).iter().map(|v| v / KMH_PER_MS).collect();
    let points = drag_vs_speed(&craft, &flow, 0.0, &speeds);
    for pair in points.windows(2) {
        assert!(pair[1].drag > pair[0].drag);
    }
}

#[test]
fn test_pitch_sweep_matches_direct_evaluation() {
    let craft = create_test_craft();
    let flow = craft.context().flow.with_velocity(6.0);
    let pitches = linspace(-4.0, 8.0, 13);
    let points = lift_vs_pitch(&craft, &flow, &pitches);

    let mut reference = create_test_craft();
    reference.set_speed(6.0);
    for point in &points {
        reference.set_pitch(point.x);
        let forces = reference.evaluate();
        assert!((forces.lift - point.lift).abs() < 1e-9);
        assert!((forces.total_drag() - point.drag).abs() < 1e-9);
    }
}
