pub mod config;

pub use config::{
    model::{AspectRatioModel, FoilBounds, LiftPointPolicy, ModelConfig, StallModel},
    vpp::VppConfig,
};
