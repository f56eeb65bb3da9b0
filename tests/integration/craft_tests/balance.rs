use approx::assert_relative_eq;

use crate::common::{create_test_craft, create_test_vpp, golden_speed, KITE_LOAD};

#[test]
fn test_offset_carries_net_moment() {
    let mut craft = create_test_craft();
    craft.set_speed(golden_speed());
    craft.set_pitch(2.0);
    let result = craft.balance();

    assert_relative_eq!(result.fuselage_offset * KITE_LOAD, result.net_moment, epsilon = 1e-9);

    let pitch = 2.0_f64.to_radians();
    let height = craft.mast.zpos() + craft.mast.span() + craft.rider.cg_height;
    assert_relative_eq!(
        result.deck_offset * pitch.cos() - height * pitch.sin(),
        result.fuselage_offset,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        result.stance(),
        result.deck_offset + result.drag_posture + result.drive_posture,
        epsilon = 1e-12
    );
}

#[test]
fn test_drive_posture_follows_drive_path() {
    let mut craft = create_test_craft();
    craft.set_speed(golden_speed());
    let through = craft.balance();
    assert_relative_eq!(
        through.drive_posture,
        through.drive_force * craft.drive.height / KITE_LOAD,
        epsilon = 1e-12
    );

    craft.drive.through_rider = false;
    let direct = craft.balance();
    assert_eq!(direct.drive_posture, 0.0);
    assert_relative_eq!(direct.fuselage_offset, through.fuselage_offset, epsilon = 1e-12);
}

#[test]
fn test_balance_after_trim() {
    let vpp = create_test_vpp();
    let mut craft = create_test_craft();
    let trim = vpp.steady_flight_at_given_speed(&mut craft, golden_speed(), KITE_LOAD);
    assert!(trim.success, "{}", trim);

    let result = craft.balance();
    assert!(result.fuselage_offset.is_finite());
    assert_relative_eq!(result.drive_force, trim.drag, max_relative = 1e-9);
    // A rider stands within a board length of the mast.
    assert!(result.stance().abs() < 1.0, "stance {}", result.stance());
}
