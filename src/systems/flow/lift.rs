use std::f64::consts::PI;

use crate::components::AnalyticShape;
use crate::resources::{AspectRatioModel, StallModel};
use crate::utils::rad_to_deg;

/// Lift multiplier for an analytic section past stall onset.
pub fn stall_factor(model: StallModel, shape: AnalyticShape, aoa: f64) -> f64 {
    let alpha = aoa.abs();
    match model {
        StallModel::Quadratic => {
            if alpha > 10.0 {
                let a = alpha.min(20.0);
                0.5 + 0.1 * a - 0.005 * a * a
            } else {
                1.0
            }
        }
        StallModel::Cubic => {
            let s = ((alpha - shape.stall_onset()) / 10.0).clamp(0.0, 1.0);
            1.0 - 0.5 * (3.0 * s * s - 2.0 * s * s * s)
        }
        StallModel::None => 1.0,
    }
}

/// Helmbold low aspect ratio lift slope ratio.
pub fn helmbold(aspect_ratio: f64) -> f64 {
    aspect_ratio / ((aspect_ratio * aspect_ratio + 4.0).sqrt() + 2.0)
}

fn classic_high(cl: f64, aspect_ratio: f64) -> f64 {
    cl / (1.0 + cl.abs() / (PI * aspect_ratio))
}

/// Helmbold form scaled to meet the classic correction at AR 4.
fn classic_low(cl: f64, aspect_ratio: f64) -> f64 {
    cl * helmbold(aspect_ratio) / helmbold(4.0) / (1.0 + cl.abs() / (4.0 * PI))
}

/// Finite-span correction of a section lift coefficient.
pub fn aspect_ratio_correction(model: AspectRatioModel, cl: f64, aspect_ratio: f64) -> f64 {
    match model {
        AspectRatioModel::Classic => {
            if aspect_ratio >= 4.0 {
                classic_high(cl, aspect_ratio)
            } else {
                classic_low(cl, aspect_ratio)
            }
        }
        AspectRatioModel::LowArBlend => {
            if aspect_ratio >= 4.0 {
                classic_high(cl, aspect_ratio)
            } else {
                let w = ((aspect_ratio - 1.0) / 3.0).clamp(0.0, 1.0);
                w * classic_high(cl, aspect_ratio) + (1.0 - w) * classic_low(cl, aspect_ratio)
            }
        }
        AspectRatioModel::JavaFoil => cl * aspect_ratio / (aspect_ratio + 2.0),
        AspectRatioModel::None => cl,
    }
}

/// Downwash angle behind a lifting wing (deg).
pub fn downwash(wing_cl: f64, wing_aspect_ratio: f64) -> f64 {
    rad_to_deg(2.0 * wing_cl / (PI * wing_aspect_ratio))
}
