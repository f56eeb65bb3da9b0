use foilsim::{Vpp, VppConfig, VppGoal};

use crate::common::{
    assert_outcome_within, create_test_craft, create_test_vpp, KITE_LOAD, KITE_MAX_DRAG,
};

#[test]
fn test_takeoff_reports_only_feasible_speeds() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let takeoff = vpp.find_min_takeoff_v(&mut craft, KITE_LOAD, KITE_MAX_DRAG);
    assert_outcome_within(&takeoff, KITE_LOAD, KITE_MAX_DRAG);
    assert_eq!(takeoff.goal, VppGoal::Takeoff);

    // Re-trimming at the reported speed satisfies the same predicate.
    let mut check = create_test_craft();
    let trim = vpp.steady_flight_at_given_speed(&mut check, takeoff.speed, KITE_LOAD);
    assert!(trim.success && trim.drag <= KITE_MAX_DRAG, "{}", trim);

    // A step below the search resolution does not.
    let mut below = create_test_craft();
    let trim = vpp.steady_flight_at_given_speed(&mut below, takeoff.speed - 0.05, KITE_LOAD);
    assert!(!trim.success || trim.drag > KITE_MAX_DRAG, "{}", trim);
}

#[test]
fn test_heavier_rider_takes_off_later() {
    let vpp = create_test_vpp();
    let light = vpp.find_min_takeoff_v(&mut create_test_craft(), 600.0, KITE_MAX_DRAG);
    let heavy = vpp.find_min_takeoff_v(&mut create_test_craft(), 900.0, KITE_MAX_DRAG);
    assert!(light.success && heavy.success);
    assert!(heavy.speed > light.speed);
}

#[test]
fn test_max_speed_within_limits() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let top = vpp.max_speed(&mut craft, KITE_LOAD, KITE_LOAD, KITE_MAX_DRAG);
    assert_outcome_within(&top, KITE_LOAD, KITE_MAX_DRAG);
    assert_eq!(top.goal, VppGoal::MaxSpeed);
    assert!(top.lift >= KITE_LOAD);

    let mut takeoff_craft = create_test_craft();
    let takeoff = vpp.find_min_takeoff_v(&mut takeoff_craft, KITE_LOAD, KITE_MAX_DRAG);
    assert!(top.speed > takeoff.speed);
}

#[test]
fn test_more_drive_means_more_speed() {
    let vpp = create_test_vpp();
    let low = vpp.max_speed(&mut create_test_craft(), KITE_LOAD, KITE_LOAD, 200.0);
    let high = vpp.max_speed(&mut create_test_craft(), KITE_LOAD, KITE_LOAD, 300.0);
    assert_outcome_within(&low, KITE_LOAD, 200.0);
    assert_outcome_within(&high, KITE_LOAD, 300.0);
    assert!(high.speed > low.speed);
}

#[test]
fn test_easy_ride_is_cheaper_than_top_speed() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let ride = vpp.easy_ride(&mut craft, KITE_LOAD, KITE_MAX_DRAG);
    assert_outcome_within(&ride, KITE_LOAD, KITE_MAX_DRAG);
    assert_eq!(ride.goal, VppGoal::EasyRide);

    let top = vpp.max_speed(&mut create_test_craft(), KITE_LOAD, KITE_LOAD, KITE_MAX_DRAG);
    assert!(ride.drag < top.drag);
    assert!(ride.speed < top.speed);

    // The craft is left at the reported state.
    assert_eq!(craft.speed(), ride.speed);
    assert_eq!(craft.state().pitch, ride.pitch);
}

#[test]
fn test_unreachable_load_fails_cleanly() {
    let vpp = Vpp::new(VppConfig {
        speed_range: (1.0, 3.0),
        ..VppConfig::default()
    });
    let mut craft = create_test_craft();
    let takeoff = vpp.find_min_takeoff_v(&mut craft, 5000.0, KITE_MAX_DRAG);
    assert!(!takeoff.success);
    assert!(!takeoff.message.is_empty());

    let ride = vpp.easy_ride(&mut create_test_craft(), 5000.0, KITE_MAX_DRAG);
    assert!(!ride.success);
}
