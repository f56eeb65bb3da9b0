mod ambient;

pub use ambient::{ambient_properties, isa_air, Ambient};

use serde::{Deserialize, Serialize};

/// Fluid the craft moves through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Medium {
    Air,
    SeaWater,
    FreshWater,
    Custom { density: f64, viscosity: f64 },
}

/// Ambient flow seen by every part during one evaluation.
///
/// A value type: the setters return a new state with the derived
/// properties recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    medium: Medium,
    altitude: f64,
    depth: f64,
    velocity: f64,
    density: f64,
    pressure: f64,
    viscosity: f64,
    temperature: f64,
}

impl FlowState {
    pub fn new(medium: Medium, velocity: f64) -> Self {
        Self::build(medium, 0.0, 0.0, velocity)
    }

    pub fn water(velocity: f64) -> Self {
        Self::new(Medium::SeaWater, velocity)
    }

    pub fn air(velocity: f64) -> Self {
        Self::new(Medium::Air, velocity)
    }

    fn build(medium: Medium, altitude: f64, depth: f64, velocity: f64) -> Self {
        let ambient = ambient_properties(medium, altitude, depth);
        Self {
            medium,
            altitude,
            depth,
            velocity,
            density: ambient.density,
            pressure: ambient.pressure,
            viscosity: ambient.viscosity,
            temperature: ambient.temperature,
        }
    }

    pub fn with_velocity(&self, velocity: f64) -> Self {
        Self {
            velocity,
            ..*self
        }
    }

    pub fn with_altitude(&self, altitude: f64) -> Self {
        Self::build(self.medium, altitude, self.depth, self.velocity)
    }

    pub fn with_depth(&self, depth: f64) -> Self {
        Self::build(self.medium, self.altitude, depth, self.velocity)
    }

    pub fn with_medium(&self, medium: Medium) -> Self {
        Self::build(medium, self.altitude, self.depth, self.velocity)
    }

    pub fn medium(&self) -> Medium {
        self.medium
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// m/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Dynamic viscosity (Pa·s).
    pub fn viscosity(&self) -> f64 {
        self.viscosity
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Kinematic viscosity (m^2/s).
    pub fn kinematic_viscosity(&self) -> f64 {
        self.viscosity / self.density
    }

    /// `q = ½ρV²` (Pa).
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.velocity * self.velocity
    }
}
