pub mod components;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{Craft, CraftConfig, FlowState, FoilProfile, FoilRegistry, Medium, Part};
pub use resources::{ModelConfig, VppConfig};
pub use systems::{Vpp, VppGoal, VppOutcome};
pub use utils::{Result, SimError};
