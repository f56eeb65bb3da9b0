use approx::assert_relative_eq;
use foilsim::systems::{CraftForces, DragBreakdown};
use foilsim::VppOutcome;

/// Assert that whole-craft forces are finite and physically signed
#[track_caller]
pub fn assert_forces_valid(forces: &CraftForces) {
    assert!(forces.lift.is_finite(), "Lift is not finite");
    assert!(forces.side_force.is_finite(), "Side force is not finite");
    assert!(forces.total_drag().is_finite(), "Drag is not finite");
    assert!(forces.total_drag() > 0.0, "Drag must be positive");
    assert_breakdown_consistent(&forces.drag, forces.total_drag());
}

/// Assert that every drag term is non-negative and the terms add up
#[track_caller]
pub fn assert_breakdown_consistent(breakdown: &DragBreakdown, total: f64) {
    let terms = [
        ("rider", breakdown.rider),
        ("board hull", breakdown.board_hull),
        ("board aero", breakdown.board_aero),
        ("junction", breakdown.junction),
        ("spray", breakdown.spray),
    ];
    for (name, value) in terms {
        assert!(value >= 0.0, "{} drag is negative: {}", name, value);
    }
    let sum = breakdown.rider
        + breakdown.board_hull
        + breakdown.board_aero
        + breakdown.wing
        + breakdown.stabilizer
        + breakdown.mast
        + breakdown.fuselage
        + breakdown.junction
        + breakdown.spray;
    assert_relative_eq!(sum, total, epsilon = 1e-9);
}

/// Assert that a successful outcome respects the lift and drag limits
#[track_caller]
pub fn assert_outcome_within(outcome: &VppOutcome, min_lift: f64, max_drag: f64) {
    assert!(outcome.success, "Search failed: {}", outcome);
    assert!(
        outcome.lift >= min_lift * 0.99,
        "Lift {} below {}",
        outcome.lift,
        min_lift
    );
    assert!(
        outcome.drag <= max_drag,
        "Drag {} above {}",
        outcome.drag,
        max_drag
    );
}
