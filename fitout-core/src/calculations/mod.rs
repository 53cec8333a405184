//! Estimation logic for the two fit-out pipelines.
//!
//! This module provides the suspended ceiling and wall panel estimators plus
//! the pattern generator the wall estimator delegates to. Each estimator is a
//! pure function of its configuration: callers recompute on every input
//! change and an invalid configuration yields `None`, never an error.

pub mod ceiling;
pub mod common;
pub mod pattern;
pub mod wall_panel;

pub use ceiling::{CeilingEstimate, CeilingEstimator, WastePolicy};
pub use pattern::PatternGenerator;
pub use wall_panel::{CoveragePolicy, WallPanelConfig, WallPanelEstimate, WallPanelEstimator};
