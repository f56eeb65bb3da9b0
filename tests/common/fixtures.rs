use foilsim::utils::KMH_PER_MS;
use foilsim::{Craft, CraftConfig, FoilRegistry, Vpp};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Rider and gear weight carried by the foils (N)
pub const KITE_LOAD: f64 = 735.0;

/// Drag a kite can supply (N)
pub const KITE_MAX_DRAG: f64 = 250.0;

/// Cruise speed of the reference scenario
pub fn golden_speed() -> f64 {
    20.0 / KMH_PER_MS
}

/// Creates the built-in kite foil craft
pub fn create_test_craft() -> Craft {
    Craft::from_config(&create_test_config(), &FoilRegistry::with_builtins())
}

/// Creates the built-in kite foil configuration
pub fn create_test_config() -> CraftConfig {
    CraftConfig::default_kite_foil()
}

/// Creates a solver with default settings
pub fn create_test_vpp() -> Vpp {
    Vpp::new(create_test_config().vpp)
}

/// Deterministic RNG for property checks
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
