pub mod model;
pub mod vpp;

pub use model::{AspectRatioModel, FoilBounds, LiftPointPolicy, ModelConfig, StallModel};
pub use vpp::VppConfig;
