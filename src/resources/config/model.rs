use serde::{Deserialize, Serialize};

/// Stall attenuation applied to analytic profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StallModel {
    /// Quadratic fade beyond ±10°, angle held at 20°.
    Quadratic,
    /// Smoothstep fade to half lift over 10° from a per-family onset.
    Cubic,
    None,
}

/// Finite-span lift correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatioModel {
    /// `1/(1+|Cl|/πAR)` down to AR 4, Helmbold below.
    Classic,
    /// Classic above AR 4, linear blend towards Helmbold at AR 1.
    LowArBlend,
    /// `AR/(AR+2)`.
    JavaFoil,
    None,
}

/// Where a surface's lift acts in the moment balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftPointPolicy {
    AerodynamicCenter,
    CenterOfLift,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoilBounds {
    /// Effective angle of attack (deg)
    pub aoa_range: (f64, f64),
    /// Thickness (% chord)
    pub thickness_range: (f64, f64),
    /// Camber (% chord)
    pub camber_range: (f64, f64),
}

impl Default for FoilBounds {
    fn default() -> Self {
        Self {
            aoa_range: (-20.0, 20.0),
            thickness_range: (1.0, 20.0),
            camber_range: (-20.0, 20.0),
        }
    }
}

/// Selection of the empirical layers used by the flow solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub stall_model: StallModel,
    pub aspect_ratio_model: AspectRatioModel,
    /// Scale profile drag by `(Re_ref/Re)^0.11`
    pub reynolds_correction: bool,
    /// Add flat-plate skin friction on both faces
    pub skin_friction: bool,
    pub induced_drag: bool,
    /// Hoerner junction drag at part intersections
    pub junction_drag: bool,
    /// Hoerner spray drag where the mast pierces the surface
    pub spray_drag: bool,
    /// Correct the stabilizer for the main-wing downwash
    pub downwash: bool,
    pub lift_point: LiftPointPolicy,
    pub bounds: FoilBounds,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            stall_model: StallModel::Quadratic,
            aspect_ratio_model: AspectRatioModel::Classic,
            reynolds_correction: true,
            skin_friction: false,
            induced_drag: true,
            junction_drag: true,
            spray_drag: true,
            downwash: true,
            lift_point: LiftPointPolicy::AerodynamicCenter,
            bounds: FoilBounds::default(),
        }
    }
}
