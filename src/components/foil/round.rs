use serde::{Deserialize, Serialize};

use super::{data, Coefficients};
use crate::utils::{interp_linear, MIN_REYNOLDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundShape {
    Cylinder,
    Sphere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Smooth,
    Rough,
}

/// Bluff body with an empirical drag curve in Reynolds number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundBody {
    pub name: String,
    pub shape: RoundShape,
    pub surface: Surface,
}

impl RoundBody {
    pub fn new(name: impl Into<String>, shape: RoundShape, surface: Surface) -> Self {
        Self {
            name: name.into(),
            shape,
            surface,
        }
    }

    fn curve(&self) -> &'static [(f64, f64)] {
        match (self.shape, self.surface) {
            (RoundShape::Cylinder, Surface::Smooth) => &data::CYLINDER_SMOOTH,
            (RoundShape::Cylinder, Surface::Rough) => &data::CYLINDER_ROUGH,
            (RoundShape::Sphere, Surface::Smooth) => &data::SPHERE_SMOOTH,
            (RoundShape::Sphere, Surface::Rough) => &data::SPHERE_ROUGH,
        }
    }

    /// Drag only; a round body carries no lift or moment.
    pub fn coefficients(&self, reynolds: f64) -> Coefficients {
        let log_re = reynolds.max(MIN_REYNOLDS).log10();
        Coefficients {
            cl: 0.0,
            cd: interp_linear(self.curve(), log_re),
            cm: 0.0,
        }
    }
}
