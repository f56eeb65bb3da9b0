use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{
    data, AnalyticFoil, AnalyticShape, FoilError, FoilProfile, GenericFoil, PolarTable,
    RoundBody, RoundShape, Surface, TabulatedFoil, GRID_15, GRID_25,
};
use crate::utils::{interp_linear, DEFAULT_REFERENCE_REYNOLDS};

/// Profile used when a requested name is unknown.
pub const DEFAULT_FOIL: &str = "NACA 4-digit";

/// Named foil profiles shared by every part that references them.
#[derive(Debug, Clone)]
pub struct FoilRegistry {
    profiles: HashMap<String, Arc<FoilProfile>>,
    names: Vec<String>,
    default: Arc<FoilProfile>,
}

impl Default for FoilRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl FoilRegistry {
    /// Registry seeded with the analytic, tabulated, generic and round-body profiles.
    pub fn with_builtins() -> Self {
        let re = DEFAULT_REFERENCE_REYNOLDS;
        let default = Arc::new(FoilProfile::Generic(GenericFoil::new(DEFAULT_FOIL, re)));
        let mut registry = Self {
            profiles: HashMap::new(),
            names: Vec::new(),
            default: default.clone(),
        };

        let analytic = |name: &str, shape| {
            FoilProfile::Analytic(AnalyticFoil::new(name, shape, re))
        };
        registry.insert(analytic("Joukowski", AnalyticShape::Joukowski));
        registry.insert(analytic("Ellipse", AnalyticShape::Ellipse));
        registry.insert(analytic("Flat Plate", AnalyticShape::FlatPlate));
        registry.insert_shared(default);

        let tab15 = [
            ("NACA 0012", &data::NACA_0012),
            ("NACA 4412", &data::NACA_4412),
            ("NACA 63-412", &data::NACA_63_412),
        ];
        for (name, polar) in tab15 {
            let table = PolarTable::from_data(GRID_15, polar);
            registry.insert(FoilProfile::Tabulated(TabulatedFoil::new(name, table, re)));
        }
        let tab25 = [
            ("Eppler E817", &data::EPPLER_E817),
            ("Eppler E836", &data::EPPLER_E836),
        ];
        for (name, polar) in tab25 {
            let table = PolarTable::from_data(GRID_25, polar);
            registry.insert(FoilProfile::Tabulated(TabulatedFoil::new(name, table, re)));
        }

        let round = [
            ("Cylinder", RoundShape::Cylinder, Surface::Smooth),
            ("Cylinder (rough)", RoundShape::Cylinder, Surface::Rough),
            ("Sphere", RoundShape::Sphere, Surface::Smooth),
            ("Sphere (rough)", RoundShape::Sphere, Surface::Rough),
        ];
        for (name, shape, surface) in round {
            registry.insert(FoilProfile::Round(RoundBody::new(name, shape, surface)));
        }

        registry
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Adds or replaces a profile, returning the shared handle.
    pub fn insert(&mut self, profile: FoilProfile) -> Arc<FoilProfile> {
        self.insert_shared(Arc::new(profile))
    }

    fn insert_shared(&mut self, profile: Arc<FoilProfile>) -> Arc<FoilProfile> {
        let key = Self::key(profile.name());
        if self.profiles.insert(key, profile.clone()).is_none() {
            self.names.push(profile.name().to_string());
        }
        profile
    }

    /// Case-insensitive lookup without fallback.
    pub fn lookup(&self, name: &str) -> Option<Arc<FoilProfile>> {
        self.profiles.get(&Self::key(name)).cloned()
    }

    /// Case-insensitive lookup, falling back to the default profile.
    pub fn get(&self, name: &str) -> Arc<FoilProfile> {
        self.lookup(name).unwrap_or_else(|| {
            warn!(foil = name, fallback = DEFAULT_FOIL, "unknown foil, using default");
            self.default.clone()
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(&Self::key(name))
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn default_profile(&self) -> Arc<FoilProfile> {
        self.default.clone()
    }

    /// Parses `aoa cl cd [cm]` rows and registers them as a 25-point polar.
    ///
    /// Fields may be separated by whitespace or commas and `#` starts a
    /// comment. Rows are resampled linearly onto the 2° grid and held beyond
    /// the first and last angle.
    pub fn import_polar(&mut self, name: &str, text: &str) -> Result<Arc<FoilProfile>, FoilError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FoilError::EmptyName);
        }

        let mut rows: Vec<[f64; 4]> = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let fields: Vec<&str> = content
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();
            if fields.len() < 3 || fields.len() > 4 {
                return Err(FoilError::InvalidRow {
                    name: name.to_string(),
                    line,
                    message: format!("expected 3 or 4 columns, found {}", fields.len()),
                });
            }

            let mut row = [0.0; 4];
            for (slot, field) in row.iter_mut().zip(&fields) {
                *slot = field.parse().map_err(|_| FoilError::InvalidRow {
                    name: name.to_string(),
                    line,
                    message: format!("'{field}' is not a number"),
                })?;
            }

            if let Some(previous) = rows.last() {
                if row[0] <= previous[0] {
                    return Err(FoilError::UnsortedAngles {
                        name: name.to_string(),
                        line,
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(FoilError::EmptyPolar(name.to_string()));
        }

        let column = |k: usize| -> Vec<f64> {
            let points: Vec<(f64, f64)> = rows.iter().map(|r| (r[0], r[k])).collect();
            GRID_25.angles().map(|a| interp_linear(&points, a)).collect()
        };
        let table = PolarTable {
            grid: GRID_25,
            cl: column(1),
            cd: column(2),
            cm: column(3),
        };

        debug!(foil = name, rows = rows.len(), "imported polar");
        let profile = FoilProfile::Tabulated(TabulatedFoil::new(
            name,
            table,
            DEFAULT_REFERENCE_REYNOLDS,
        ));
        Ok(self.insert(profile))
    }
}
