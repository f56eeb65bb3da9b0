use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::components::Medium;
use crate::resources::{ModelConfig, VppConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid craft configuration: {0}")]
    ValidationError(String),
}

fn default_true() -> bool {
    true
}

/// Geometry and section of one lifting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartConfig {
    /// Foil profile name, resolved through the registry
    pub foil: String,
    /// Constant chord (m), used when no segments are given
    #[serde(default)]
    pub chord: Option<f64>,
    /// Chords from root to tip (m)
    #[serde(default)]
    pub chord_segments: Vec<f64>,
    /// Leading-edge offsets matching `chord_segments` (m, positive aft)
    #[serde(default)]
    pub le_offsets: Vec<f64>,
    /// Tip to tip, or full length for the mast (m)
    pub span: f64,
    /// Thickness (% chord)
    pub thickness: f64,
    /// Camber (% chord)
    #[serde(default)]
    pub camber: f64,
    /// Incidence relative to the fuselage (deg)
    #[serde(default)]
    pub aoa: f64,
    /// Root leading edge, positive aft of the mast (m)
    pub xpos: f64,
    /// Height of the root chord line (m)
    #[serde(default)]
    pub zpos: f64,
    /// Number of junctions with other parts
    #[serde(default)]
    pub junctions: u32,
    /// Include the section pitching moment
    #[serde(default = "default_true")]
    pub include_moment: bool,
}

impl PartConfig {
    fn rectangular(foil: &str, chord: f64, span: f64, thickness: f64, xpos: f64) -> Self {
        Self {
            foil: foil.to_string(),
            chord: Some(chord),
            chord_segments: Vec::new(),
            le_offsets: Vec::new(),
            span,
            thickness,
            camber: 0.0,
            aoa: 0.0,
            xpos,
            zpos: 0.0,
            junctions: 0,
            include_moment: true,
        }
    }

    /// Root-to-tip chords, falling back to the constant chord.
    pub fn chords(&self) -> Vec<f64> {
        if self.chord_segments.is_empty() {
            let chord = self.chord.unwrap_or(0.0);
            vec![chord, chord]
        } else {
            self.chord_segments.clone()
        }
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(format!("{label}: {msg}")));
        if self.chord.is_none() && self.chord_segments.is_empty() {
            return invalid("needs either chord or chord_segments".to_string());
        }
        if self.chords().iter().any(|c| !c.is_finite() || *c <= 0.0) {
            return invalid("chords must be positive".to_string());
        }
        if !self.le_offsets.is_empty() && self.le_offsets.len() != self.chord_segments.len() {
            return invalid(format!(
                "{} le_offsets for {} chord_segments",
                self.le_offsets.len(),
                self.chord_segments.len()
            ));
        }
        if !self.span.is_finite() || self.span <= 0.0 {
            return invalid(format!("span must be positive, got {}", self.span));
        }
        if self.foil.trim().is_empty() {
            return invalid("foil name is empty".to_string());
        }
        Ok(())
    }
}

/// Rider aerodynamics and posture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderConfig {
    /// Drag area (m²)
    pub cda: f64,
    /// Centre of gravity above the deck (m)
    pub cg_height: f64,
}

impl Default for RiderConfig {
    fn default() -> Self {
        Self {
            cda: 0.45,
            cg_height: 0.95,
        }
    }
}

/// Board mass and drag while the hull still touches the water.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// N
    pub weight: f64,
    /// Centre of gravity, positive aft of the mast (m)
    pub xpos: f64,
    /// Hull drag factor below the transition speed (N·s²/m²)
    pub hull_drag_factor: f64,
    /// Speed at which the hull starts to unload (m/s)
    pub transition_speed: f64,
    /// e-folding speed of the hull drag above the transition (m/s)
    pub decay_speed: f64,
    /// Aerodynamic drag area (m²)
    pub cda: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            weight: 60.0,
            xpos: -0.05,
            hull_drag_factor: 7.0,
            transition_speed: 3.5,
            decay_speed: 0.8,
            cda: 0.04,
        }
    }
}

/// Sail, kite bar or wing carried by the rider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    /// N
    pub weight: f64,
    /// m, positive aft
    pub xpos: f64,
    /// Above the deck (m)
    pub height: f64,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            weight: 15.0,
            xpos: 0.0,
            height: 1.0,
        }
    }
}

/// Where and how the propulsive force enters the craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Line of action above the deck (m)
    pub height: f64,
    /// Drive transmitted through the rider's body (kite harness, wing handles)
    pub through_rider: bool,
    /// Side force the mast must hold, as a fraction of the drive
    pub side_load_ratio: f64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            height: 0.85,
            through_rider: true,
            side_load_ratio: 0.5,
        }
    }
}

fn default_medium() -> Medium {
    Medium::SeaWater
}

fn default_load() -> f64 {
    735.0
}

fn default_submersion() -> f64 {
    0.6
}

/// Complete description of a foiling craft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftConfig {
    pub name: String,
    pub wing: PartConfig,
    pub stabilizer: PartConfig,
    pub mast: PartConfig,
    pub fuselage: PartConfig,
    #[serde(default)]
    pub rider: RiderConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub rig: RigConfig,
    #[serde(default)]
    pub drive: DriveConfig,
    /// Wetted fraction of the mast (0 to 1)
    #[serde(default = "default_submersion")]
    pub mast_submersion: f64,
    /// Weight the foils must carry (N)
    #[serde(default = "default_load")]
    pub load: f64,
    #[serde(default = "default_medium")]
    pub medium: Medium,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub vpp: VppConfig,
}

impl CraftConfig {
    /// Kite foil with a tapered three-station wing and a rectangular stabilizer.
    pub fn default_kite_foil() -> Self {
        Self {
            name: "Kite foil".to_string(),
            wing: PartConfig {
                chord: None,
                chord_segments: vec![0.14, 0.115, 0.06],
                le_offsets: vec![0.0, 0.008, 0.03],
                camber: 4.0,
                aoa: 2.0,
                zpos: -0.03,
                junctions: 2,
                ..PartConfig::rectangular("NACA 4-digit", 0.14, 0.80, 12.0, -0.30)
            },
            stabilizer: PartConfig {
                aoa: -0.5,
                zpos: -0.03,
                junctions: 2,
                ..PartConfig::rectangular("NACA 0012", 0.08, 0.36, 10.0, 0.50)
            },
            mast: PartConfig {
                junctions: 2,
                ..PartConfig::rectangular("NACA 4-digit", 0.11, 0.85, 14.0, 0.0)
            },
            fuselage: PartConfig {
                zpos: -0.03,
                ..PartConfig::rectangular("NACA 4-digit", 0.90, 0.025, 20.0, -0.33)
            },
            rider: RiderConfig::default(),
            board: BoardConfig::default(),
            rig: RigConfig::default(),
            drive: DriveConfig::default(),
            mast_submersion: default_submersion(),
            load: default_load(),
            medium: default_medium(),
            model: ModelConfig::default(),
            vpp: VppConfig::default(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CraftConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wing.validate("wing")?;
        self.stabilizer.validate("stabilizer")?;
        self.mast.validate("mast")?;
        self.fuselage.validate("fuselage")?;

        if !(0.0..=1.0).contains(&self.mast_submersion) {
            return Err(ConfigError::ValidationError(format!(
                "mast_submersion must lie in [0, 1], got {}",
                self.mast_submersion
            )));
        }
        if !self.load.is_finite() || self.load <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "load must be positive, got {}",
                self.load
            )));
        }
        let (low, high) = self.vpp.speed_range;
        if low <= 0.0 || high <= low {
            return Err(ConfigError::ValidationError(format!(
                "speed_range must be increasing and positive, got ({low}, {high})"
            )));
        }
        let (low, high) = self.vpp.pitch_range;
        if high <= low {
            return Err(ConfigError::ValidationError(format!(
                "pitch_range must be increasing, got ({low}, {high})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_validates() {
        assert!(CraftConfig::default_kite_foil().validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CraftConfig::default_kite_foil();
        let yaml = config.to_yaml().unwrap();
        let parsed = CraftConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = r#"
name: Minimal
wing: { foil: Joukowski, chord: 0.15, span: 0.9, thickness: 12, camber: 3, xpos: -0.3 }
stabilizer: { foil: NACA 0012, chord: 0.08, span: 0.35, thickness: 12, aoa: -1, xpos: 0.5 }
mast: { foil: NACA 4-digit, chord: 0.11, span: 0.8, thickness: 14, xpos: 0.0 }
fuselage: { foil: NACA 4-digit, chord: 0.8, span: 0.025, thickness: 20, xpos: -0.3 }
"#;
        let config = CraftConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.load, 735.0);
        assert_eq!(config.mast_submersion, 0.6);
        assert_eq!(config.medium, Medium::SeaWater);
        assert_eq!(config.rider, RiderConfig::default());
        assert_eq!(config.wing.chords(), vec![0.15, 0.15]);
        assert!(config.wing.include_moment);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = CraftConfig::default_kite_foil();
        config.mast_submersion = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = CraftConfig::default_kite_foil();
        config.wing.le_offsets = vec![0.0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("wing"), "{err}");

        let mut config = CraftConfig::default_kite_foil();
        config.stabilizer.chord = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_yaml_is_reported() {
        assert!(matches!(
            CraftConfig::from_yaml("name: [unterminated"),
            Err(ConfigError::YamlError(_))
        ));
    }
}
