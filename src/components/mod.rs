pub mod craft;
pub mod flow;
pub mod foil;
pub mod part;

pub use craft::{
    BoardConfig, ConfigError, Craft, CraftConfig, CraftState, DriveConfig, PartConfig, RigConfig,
    RiderConfig,
};
pub use flow::{FlowState, Medium};
pub use foil::{
    AnalyticFoil, AnalyticShape, Coefficients, FoilError, FoilProfile, FoilQuery, FoilRegistry,
    GenericFoil, PolarTable, RoundBody, TabulatedFoil, DEFAULT_FOIL,
};
pub use part::{EvalKey, Part, PartKind, PartOutputs, Planform, PlanformProperties, Station};
