pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE: f64 = 11000.0; // m

// Sutherland's law for air
pub const SUTHERLAND_REFERENCE_VISCOSITY: f64 = 1.458e-6; // kg/(m·s·K^0.5)
pub const SUTHERLAND_CONSTANT: f64 = 110.4; // K

// Water at 15 °C
pub const SEA_WATER_DENSITY: f64 = 1025.0; // kg/m^3
pub const SEA_WATER_VISCOSITY: f64 = 1.22e-3; // Pa·s
pub const FRESH_WATER_DENSITY: f64 = 999.1; // kg/m^3
pub const FRESH_WATER_VISCOSITY: f64 = 1.138e-3; // Pa·s

// Numerical floors
pub const MIN_REYNOLDS: f64 = 1.0e3;
pub const MIN_ASPECT_RATIO: f64 = 0.01;
pub const MIN_AREA: f64 = 1.0e-6; // m^2
pub const MIN_LIFT_FOR_CP: f64 = 1.0e-3; // N
pub const MIN_LOAD: f64 = 1.0; // N
pub const MIN_VELOCITY: f64 = 1.0e-3; // m/s

/// Exponent of the profile drag Reynolds scaling.
pub const REYNOLDS_DRAG_EXPONENT: f64 = 0.11;
/// Default reference Reynolds number of the tabulated foil data.
pub const DEFAULT_REFERENCE_REYNOLDS: f64 = 1.0e6;

pub const KMH_PER_MS: f64 = 3.6;
