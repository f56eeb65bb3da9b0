use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{data, Coefficients};
use crate::utils::{band_weight, deg_to_rad, lerp_unclamped};

/// Closed-form foil families obtained by conformal mapping of a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalyticShape {
    Joukowski,
    Ellipse,
    FlatPlate,
}

impl AnalyticShape {
    /// Stall onset used by the per-family cubic stall model (deg).
    pub fn stall_onset(&self) -> f64 {
        match self {
            AnalyticShape::Joukowski => 12.0,
            AnalyticShape::Ellipse => 10.0,
            AnalyticShape::FlatPlate => 8.0,
        }
    }
}

/// Cylinder placement in the circle plane for a given thickness and camber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderMapping {
    /// Centre offset along x.
    pub xc: f64,
    /// Centre offset along y (sets the camber).
    pub yc: f64,
    /// Cylinder radius.
    pub radius: f64,
    /// Kutta angle (rad) placing the rear stagnation point on the trailing edge.
    pub beta: f64,
    /// Chord of the mapped foil in circle-plane units.
    pub chord: f64,
}

impl CylinderMapping {
    pub fn new(shape: AnalyticShape, thickness: f64, camber: f64) -> Self {
        let thk = if shape == AnalyticShape::FlatPlate {
            0.0
        } else {
            thickness / 25.0
        };
        let yc = camber / 25.0 / 2.0;

        let (xc, radius) = match shape {
            AnalyticShape::Joukowski => {
                let radius = thk / 4.0 + (thk * thk / 16.0 + yc * yc + 1.0).sqrt();
                (1.0 - (radius * radius - yc * yc).sqrt(), radius)
            }
            AnalyticShape::Ellipse => (0.0, (1.0 + yc * yc).sqrt() + thk / 4.0),
            AnalyticShape::FlatPlate => (0.0, (1.0 + yc * yc).sqrt()),
        };

        let half = (radius * radius - yc * yc).sqrt();
        let leading = xc - half;
        let trailing = xc + half;
        let chord = (trailing + 1.0 / trailing) - (leading + 1.0 / leading);

        Self {
            xc,
            yc,
            radius,
            beta: (yc / radius).asin(),
            chord,
        }
    }

    /// Non-dimensional circulation satisfying the Kutta condition.
    pub fn circulation(&self, aoa_deg: f64) -> f64 {
        2.0 * self.radius * (deg_to_rad(aoa_deg) + self.beta).sin()
    }

    /// Lift coefficient `Γ·4π / chord`.
    pub fn lift_coefficient(&self, aoa_deg: f64) -> f64 {
        self.circulation(aoa_deg) * 4.0 * PI / self.chord
    }

    /// Foil outline as chord-normalised points, leading edge at the origin.
    pub fn outline(&self, points: usize) -> Vec<Vector2<f64>> {
        let n = points.max(8);
        let raw: Vec<Vector2<f64>> = (0..=n)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / n as f64;
                let x = self.xc + self.radius * theta.cos();
                let y = self.yc + self.radius * theta.sin();
                let r2 = (x * x + y * y).max(1e-12);
                Vector2::new(x + x / r2, y - y / r2)
            })
            .collect();

        let min_x = raw.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = raw.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let scale = (max_x - min_x).max(1e-12);
        raw.into_iter()
            .map(|p| Vector2::new((p.x - min_x) / scale, p.y / scale))
            .collect()
    }
}

/// Thin-foil profile with circulation lift and fitted polynomial drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticFoil {
    pub name: String,
    pub shape: AnalyticShape,
    pub reference_reynolds: f64,
}

impl AnalyticFoil {
    pub fn new(name: impl Into<String>, shape: AnalyticShape, reference_reynolds: f64) -> Self {
        Self {
            name: name.into(),
            shape,
            reference_reynolds,
        }
    }

    pub fn coefficients(&self, aoa: f64, thickness: f64, camber: f64) -> Coefficients {
        let mapping = CylinderMapping::new(self.shape, thickness, camber);
        Coefficients {
            cl: mapping.lift_coefficient(aoa),
            cd: polynomial_drag(aoa, thickness, camber),
            cm: -PI * camber / 100.0,
        }
    }
}

/// Drag from the band polynomial surface, blended across camber then thickness.
///
/// `ANALYTIC_DRAG_POLY` is indexed `[camber band][thickness band]`. Negative
/// camber mirrors the angle.
pub fn polynomial_drag(aoa: f64, thickness: f64, camber: f64) -> f64 {
    let (aoa, camber) = if camber < 0.0 {
        (-aoa, -camber)
    } else {
        (aoa, camber)
    };
    let thickness = thickness.clamp(data::THICKNESS_BANDS[0], data::THICKNESS_BANDS[3]);
    let camber = camber.min(data::CAMBER_BANDS[4]);

    let (ti, wt) = band_weight(thickness, data::THICKNESS_BANDS[0], 5.0, 4);
    let (ci, wc) = band_weight(camber, data::CAMBER_BANDS[0], 5.0, 5);

    let poly = |c: usize, t: usize| {
        let [d0, d1, d2] = data::ANALYTIC_DRAG_POLY[c][t];
        d0 + d1 * aoa + d2 * aoa * aoa
    };

    let thin = lerp_unclamped(poly(ci, ti), poly(ci + 1, ti), wc);
    let thick = lerp_unclamped(poly(ci, ti + 1), poly(ci + 1, ti + 1), wc);
    lerp_unclamped(thin, thick, wt)
}
