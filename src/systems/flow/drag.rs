use std::f64::consts::PI;

use crate::utils::{MIN_AREA, MIN_REYNOLDS, REYNOLDS_DRAG_EXPONENT};

/// Chord Reynolds number, floored at `MIN_REYNOLDS`.
pub fn reynolds_number(velocity: f64, chord: f64, kinematic_viscosity: f64) -> f64 {
    (velocity * chord / kinematic_viscosity).max(MIN_REYNOLDS)
}

/// Scales profile drag measured at `reference` to the actual Reynolds number.
pub fn reynolds_scaled_drag(cd: f64, reference: f64, reynolds: f64) -> f64 {
    cd * (reference / reynolds.max(MIN_REYNOLDS)).powf(REYNOLDS_DRAG_EXPONENT)
}

/// Flat-plate friction on both faces, laminar and turbulent terms combined.
pub fn skin_friction(reynolds: f64) -> f64 {
    let re = reynolds.max(MIN_REYNOLDS);
    2.0 * 0.5 * (1.328 / re.sqrt() + 0.074 / re.powf(0.2))
}

fn taper_polynomial(lambda: f64) -> f64 {
    0.0524 * lambda.powi(4) - 0.15 * lambda.powi(3) + 0.1659 * lambda.powi(2) - 0.0706 * lambda
        + 0.0119
}

/// Span efficiency from taper ratio and aspect ratio.
///
/// A partially submerged mast sees its mirror image in the free surface,
/// which doubles the efficiency.
pub fn induced_efficiency(taper: f64, aspect_ratio: f64, surface_mirror: bool) -> f64 {
    let f = taper_polynomial(taper - 0.093).max(0.0);
    let ci = 1.0 / (1.0 + f * aspect_ratio);
    if surface_mirror {
        2.0 * ci
    } else {
        ci
    }
}

pub fn induced_drag(cl: f64, aspect_ratio: f64, efficiency: f64) -> f64 {
    cl * cl / (PI * aspect_ratio * efficiency)
}

/// Hoerner junction drag on the part area.
///
/// `thickness` is the absolute section thickness (m) at the junction.
pub fn junction_drag_coefficient(
    junctions: u32,
    thickness_ratio: f64,
    thickness: f64,
    area: f64,
) -> f64 {
    let per_junction = (17.0 * thickness_ratio * thickness_ratio - 0.05).max(0.0);
    junctions as f64 * per_junction * thickness * thickness / area.max(MIN_AREA)
}

/// Hoerner spray drag of a surface-piercing strut on the part area.
pub fn spray_drag_coefficient(thickness: f64, area: f64) -> f64 {
    0.24 * thickness * thickness / area.max(MIN_AREA)
}
