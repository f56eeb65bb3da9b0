use super::Medium;
use crate::utils::{
    AIR_GAS_CONSTANT, FRESH_WATER_DENSITY, FRESH_WATER_VISCOSITY, GRAVITY, ISA_LAPSE_RATE,
    ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE, SEA_WATER_DENSITY,
    SEA_WATER_VISCOSITY, SUTHERLAND_CONSTANT, SUTHERLAND_REFERENCE_VISCOSITY,
};

/// Static properties of the surrounding fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    /// kg/m^3
    pub density: f64,
    /// Pa
    pub pressure: f64,
    /// Dynamic viscosity (Pa·s)
    pub viscosity: f64,
    /// K
    pub temperature: f64,
}

/// ISA troposphere at `altitude` metres, held at the tropopause.
pub fn isa_air(altitude: f64) -> Ambient {
    let h = altitude.clamp(0.0, ISA_TROPOPAUSE);
    let temperature = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * h;
    let exponent = -GRAVITY / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT);
    let pressure = ISA_SEA_LEVEL_PRESSURE * (temperature / ISA_SEA_LEVEL_TEMP).powf(exponent);
    Ambient {
        density: pressure / (AIR_GAS_CONSTANT * temperature),
        pressure,
        viscosity: sutherland_viscosity(temperature),
        temperature,
    }
}

pub fn sutherland_viscosity(temperature: f64) -> f64 {
    SUTHERLAND_REFERENCE_VISCOSITY * temperature.powf(1.5) / (temperature + SUTHERLAND_CONSTANT)
}

/// Incompressible liquid with hydrostatic pressure at `depth` metres.
pub fn liquid(density: f64, viscosity: f64, depth: f64) -> Ambient {
    Ambient {
        density,
        pressure: ISA_SEA_LEVEL_PRESSURE + density * GRAVITY * depth.max(0.0),
        viscosity,
        temperature: ISA_SEA_LEVEL_TEMP,
    }
}

pub fn ambient_properties(medium: Medium, altitude: f64, depth: f64) -> Ambient {
    match medium {
        Medium::Air => isa_air(altitude),
        Medium::SeaWater => liquid(SEA_WATER_DENSITY, SEA_WATER_VISCOSITY, depth),
        Medium::FreshWater => liquid(FRESH_WATER_DENSITY, FRESH_WATER_VISCOSITY, depth),
        Medium::Custom { density, viscosity } => liquid(density, viscosity, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isa_sea_level() {
        let air = isa_air(0.0);
        assert_relative_eq!(air.density, 1.225, epsilon = 1e-3);
        assert_relative_eq!(air.viscosity, 1.789e-5, epsilon = 1e-7);
    }

    #[test]
    fn test_isa_density_falls_with_altitude() {
        let low = isa_air(0.0);
        let high = isa_air(3000.0);
        assert_relative_eq!(high.density, 0.9093, epsilon = 1e-3);
        assert!(high.pressure < low.pressure);
        assert_eq!(isa_air(20_000.0), isa_air(ISA_TROPOPAUSE));
    }

    #[test]
    fn test_hydrostatic_pressure() {
        let surface = ambient_properties(Medium::SeaWater, 0.0, 0.0);
        let deep = ambient_properties(Medium::SeaWater, 0.0, 10.0);
        assert_relative_eq!(
            deep.pressure - surface.pressure,
            SEA_WATER_DENSITY * GRAVITY * 10.0,
            epsilon = 1e-6
        );
        assert_eq!(surface.density, 1025.0);
    }
}
