use approx::assert_relative_eq;
use foilsim::components::ConfigError;
use foilsim::{Craft, CraftConfig, FoilRegistry, Medium};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::common::{create_test_config, create_test_vpp, KITE_LOAD, KITE_MAX_DRAG};

#[test]
fn test_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("craft.yaml");

    let mut config = create_test_config();
    config.name = "Race foil".to_string();
    config.load = 800.0;
    config.medium = Medium::FreshWater;
    config.wing.span = 0.95;
    config.save(&path).unwrap();

    let loaded = CraftConfig::from_file(&path).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_shipped_config_matches_builtin() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/kite_foil.yaml");
    let loaded = CraftConfig::from_file(path).unwrap();
    assert_eq!(create_test_config(), loaded);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let result = CraftConfig::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("craft.yaml");
    let mut config = create_test_config();
    config.load = -10.0;
    std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

    let err = CraftConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)), "{}", err);
}

#[test]
fn test_fresh_water_needs_more_speed() {
    let vpp = create_test_vpp();
    let registry = FoilRegistry::with_builtins();

    let sea = create_test_config();
    let mut fresh = create_test_config();
    fresh.medium = Medium::FreshWater;

    let sea_takeoff =
        vpp.find_min_takeoff_v(&mut Craft::from_config(&sea, &registry), KITE_LOAD, KITE_MAX_DRAG);
    let fresh_takeoff = vpp.find_min_takeoff_v(
        &mut Craft::from_config(&fresh, &registry),
        KITE_LOAD,
        KITE_MAX_DRAG,
    );
    assert!(sea_takeoff.success && fresh_takeoff.success);
    assert!(fresh_takeoff.speed >= sea_takeoff.speed);
}

#[test]
fn test_imported_polar_drives_craft() {
    let mut registry = FoilRegistry::with_builtins();
    let polar = "\
# aoa, cl, cd, cm
-10, -0.6, 0.030, -0.05
0, 0.4, 0.010, -0.08
10, 1.3, 0.040, -0.10
";
    let foil = registry.import_polar("Custom wing", polar).unwrap();
    assert_eq!(foil.name(), "Custom wing");

    let mut config = create_test_config();
    config.wing.foil = "custom wing".to_string();
    let mut craft = Craft::from_config(&config, &registry);
    assert_eq!(craft.wing.foil().name(), "Custom wing");

    craft.set_speed(6.0);
    craft.set_pitch(0.0);
    craft.evaluate();
    let wing = craft.wing.outputs().copied().unwrap_or_default();
    assert!(wing.lift > 0.0);
    assert_relative_eq!(wing.aoa, config.wing.aoa, epsilon = 1e-12);
}

#[test]
fn test_unknown_foil_falls_back_to_default() {
    let registry = FoilRegistry::with_builtins();
    let mut config = create_test_config();
    config.stabilizer.foil = "No Such Foil".to_string();
    let craft = Craft::from_config(&config, &registry);
    assert_eq!(craft.stabilizer.foil().name(), foilsim::components::DEFAULT_FOIL);
}
