use approx::assert_relative_eq;
use foilsim::VppGoal;
use rand::Rng;

use crate::common::{create_test_craft, create_test_vpp, golden_speed, seeded_rng, KITE_LOAD};

#[test]
fn test_trim_independent_of_seed() {
    let vpp = create_test_vpp();

    let mut level = create_test_craft();
    level.set_pitch(0.0);
    let from_level = vpp.steady_flight_at_given_speed(&mut level, golden_speed(), KITE_LOAD);

    let mut nose_up = create_test_craft();
    nose_up.set_pitch(6.0);
    let from_nose_up = vpp.steady_flight_at_given_speed(&mut nose_up, golden_speed(), KITE_LOAD);

    assert!(from_level.success, "{}", from_level);
    assert!(from_nose_up.success, "{}", from_nose_up);
    assert_eq!(from_level.goal, VppGoal::SteadyFlight);
    assert!(
        (from_level.pitch - from_nose_up.pitch).abs() < 0.05,
        "{} vs {}",
        from_level.pitch,
        from_nose_up.pitch
    );
    assert_relative_eq!(from_level.lift, KITE_LOAD, max_relative = 0.01);
}

#[test]
fn test_trim_from_random_seeds() {
    let vpp = create_test_vpp();
    let mut rng = seeded_rng(7);
    let mut pitches = Vec::new();
    for _ in 0..5 {
        let mut craft = create_test_craft();
        craft.set_pitch(rng.gen_range(-4.0..8.0));
        let outcome = vpp.steady_flight_at_given_speed(&mut craft, 30.0 / 3.6, KITE_LOAD);
        assert!(outcome.success, "{}", outcome);
        pitches.push(outcome.pitch);
    }
    let spread = pitches.iter().cloned().fold(f64::MIN, f64::max)
        - pitches.iter().cloned().fold(f64::MAX, f64::min);
    assert!(spread < 0.05, "pitches {:?}", pitches);
}

#[test]
fn test_faster_flight_needs_less_pitch() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let slow = vpp.steady_flight_at_given_speed(&mut craft, 20.0 / 3.6, KITE_LOAD);
    let fast = vpp.steady_flight_at_given_speed(&mut craft, 30.0 / 3.6, KITE_LOAD);
    assert!(slow.success && fast.success);
    assert!(fast.pitch < slow.pitch);
}

#[test]
fn test_failed_trim_reports_last_state() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let outcome = vpp.steady_flight_at_given_speed(&mut craft, 1.5, KITE_LOAD);
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());
    assert_eq!(craft.state().pitch, outcome.pitch);
    assert!(outcome.lift < KITE_LOAD);
}

#[test]
fn test_min_drag_pitch_beats_neighbours() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let outcome = vpp.find_aoa_of_min_drag(&mut craft, 5.0);
    assert!(outcome.success, "{}", outcome);
    assert_eq!(outcome.goal, VppGoal::MinDragPitch);

    for offset in [-0.5, -0.1, 0.1, 0.5] {
        craft.set_pitch(outcome.pitch + offset);
        assert!(craft.total_drag() >= outcome.drag - 1e-9);
    }
}
