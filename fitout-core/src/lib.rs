pub mod calculations;
pub mod models;

pub use calculations::{
    CeilingEstimate, CeilingEstimator, CoveragePolicy, PatternGenerator, WallPanelConfig,
    WallPanelEstimate, WallPanelEstimator, WastePolicy,
};
pub use models::*;
