//! Foil section models.
//!
//! Every profile answers the same question: given an effective angle of
//! attack, a thickness and a camber (both in percent of chord), return the
//! two-dimensional section coefficients. Variants differ only in where the
//! numbers come from.

mod analytic;
pub(crate) mod data;
mod generic;
mod registry;
mod round;
mod tabulated;

pub use analytic::{polynomial_drag, AnalyticFoil, AnalyticShape, CylinderMapping};
pub use generic::GenericFoil;
pub use registry::{FoilRegistry, DEFAULT_FOIL};
pub use round::{RoundBody, RoundShape, Surface};
pub use tabulated::{AoaGrid, PolarTable, TabulatedFoil, GRID_15, GRID_25};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoilError {
    #[error("polar '{0}' has no data rows")]
    EmptyPolar(String),

    #[error("polar '{name}' line {line}: {message}")]
    InvalidRow {
        name: String,
        line: usize,
        message: String,
    },

    #[error("polar '{name}' angles must increase (line {line})")]
    UnsortedAngles { name: String, line: usize },

    #[error("foil name must not be empty")]
    EmptyName,
}

/// Section lift, drag and quarter-chord moment coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub cl: f64,
    pub cd: f64,
    pub cm: f64,
}

/// Inputs to a section lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoilQuery {
    /// Effective angle of attack (deg).
    pub aoa: f64,
    /// Maximum thickness (% chord).
    pub thickness: f64,
    /// Maximum camber (% chord).
    pub camber: f64,
    /// Chord Reynolds number, used only by round bodies.
    pub reynolds: f64,
}

impl FoilQuery {
    pub fn new(aoa: f64, thickness: f64, camber: f64) -> Self {
        Self {
            aoa,
            thickness,
            camber,
            reynolds: 1e6,
        }
    }

    pub fn with_reynolds(mut self, reynolds: f64) -> Self {
        self.reynolds = reynolds;
        self
    }
}

/// A foil section, shared between parts through `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FoilProfile {
    Analytic(AnalyticFoil),
    Tabulated(TabulatedFoil),
    Generic(GenericFoil),
    Round(RoundBody),
}

impl FoilProfile {
    pub fn name(&self) -> &str {
        match self {
            FoilProfile::Analytic(foil) => &foil.name,
            FoilProfile::Tabulated(foil) => &foil.name,
            FoilProfile::Generic(foil) => &foil.name,
            FoilProfile::Round(body) => &body.name,
        }
    }

    pub fn coefficients(&self, query: &FoilQuery) -> Coefficients {
        match self {
            FoilProfile::Analytic(foil) => {
                foil.coefficients(query.aoa, query.thickness, query.camber)
            }
            FoilProfile::Tabulated(foil) => foil.coefficients(query.aoa),
            FoilProfile::Generic(foil) => {
                foil.coefficients(query.aoa, query.thickness, query.camber)
            }
            FoilProfile::Round(body) => body.coefficients(query.reynolds),
        }
    }

    /// Reynolds number the profile drag was measured at.
    ///
    /// `None` for round bodies, whose drag already depends on Reynolds.
    pub fn reference_reynolds(&self) -> Option<f64> {
        match self {
            FoilProfile::Analytic(foil) => Some(foil.reference_reynolds),
            FoilProfile::Tabulated(foil) => Some(foil.reference_reynolds),
            FoilProfile::Generic(foil) => Some(foil.reference_reynolds),
            FoilProfile::Round(_) => None,
        }
    }

    /// Analytic family, if the profile is subject to the stall model.
    pub fn stall_shape(&self) -> Option<AnalyticShape> {
        match self {
            FoilProfile::Analytic(foil) => Some(foil.shape),
            _ => None,
        }
    }

    /// Chord-normalised outline for display.
    pub fn geometry(&self, points: usize, thickness: f64, camber: f64) -> Vec<Vector2<f64>> {
        match self {
            FoilProfile::Analytic(foil) => {
                CylinderMapping::new(foil.shape, thickness, camber).outline(points)
            }
            FoilProfile::Round(_) => circle_outline(points),
            _ => naca_outline(points, thickness, camber),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FoilProfile::Analytic(foil) => format!("{} (analytic {:?})", foil.name, foil.shape),
            FoilProfile::Tabulated(foil) => format!(
                "{} ({}-point polar, {:.0}° to {:.0}°)",
                foil.name,
                foil.points(),
                foil.table.grid.min_query(),
                foil.table.grid.max_query()
            ),
            FoilProfile::Generic(foil) => format!("{} (4-digit family blend)", foil.name),
            FoilProfile::Round(body) => {
                format!("{} ({:?}, {:?} surface)", body.name, body.shape, body.surface)
            }
        }
    }
}

/// NACA 4-digit outline, maximum camber at 40 % chord.
///
/// Points run from the trailing edge over the upper surface to the leading
/// edge and back along the lower surface.
pub fn naca_outline(points: usize, thickness: f64, camber: f64) -> Vec<Vector2<f64>> {
    let n = (points / 2).max(4);
    let t = thickness / 100.0;
    let m = camber / 100.0;
    let p = 0.4;

    let surface = |x: f64| {
        let y_c = if x <= p {
            m / (p * p) * (2.0 * p - x) * x
        } else {
            m / ((1.0 - p) * (1.0 - p)) * (1.0 - 2.0 * p + (2.0 * p - x) * x)
        };
        let poly = (-0.126 + (-0.3516 + (0.2843 - 0.1015 * x) * x) * x) * x;
        let y_t = 5.0 * t * (0.2969 * x.sqrt() + poly);
        (y_c, y_t)
    };

    // Cosine spacing clusters points at both edges.
    let xs: Vec<f64> = (0..=n)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / n as f64).cos()))
        .collect();

    let upper = xs.iter().rev().map(|&x| {
        let (y_c, y_t) = surface(x);
        Vector2::new(x, y_c + y_t)
    });
    let lower = xs.iter().skip(1).map(|&x| {
        let (y_c, y_t) = surface(x);
        Vector2::new(x, y_c - y_t)
    });
    upper.chain(lower).collect()
}

fn circle_outline(points: usize) -> Vec<Vector2<f64>> {
    let n = points.max(8);
    (0..=n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            Vector2::new(0.5 + 0.5 * theta.cos(), 0.5 * theta.sin())
        })
        .collect()
}
