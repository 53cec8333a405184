//! Fluted wall panel material and cost estimates.
//!
//! Converts a wall's width and height plus a design selection into the panel
//! run, fittings, LED strip conversion and itemized costs. The color pattern
//! itself comes from [`PatternGenerator`](crate::calculations::PatternGenerator).
//!
//! # Quantities
//!
//! | Line | Formula |
//! |------|---------|
//! | Panels needed | `ceil(wallWidth / panelWidth)` — one run across the width |
//! | Total panels | per [`CoveragePolicy`]; equals panels needed for a single row |
//! | Clips | `totalPanels × clipsPerPanel` (3 to 5) |
//! | Screws / roll plugs | one per clip |
//! | LED strip | `feet / 3.281`, rounded half-up to 2 decimals (meters) |
//!
//! Feature area and labor are flat caller-supplied costs.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fitout_core::calculations::{CoveragePolicy, WallPanelConfig, WallPanelEstimator};
//! use fitout_core::models::{PanelType, WallDimensions};
//!
//! let config = WallPanelConfig {
//!     wall: WallDimensions::new(dec!(10), dec!(9.5)),
//!     panel_type: PanelType::OneFt,
//!     panel_price: dec!(12.00),
//!     clips_per_panel: 3,
//!     ..WallPanelConfig::default()
//! };
//!
//! let estimator = WallPanelEstimator::new(CoveragePolicy::SingleRow);
//! let estimate = estimator.estimate(&config).unwrap();
//!
//! assert_eq!(estimate.panels_needed, 10);
//! assert_eq!(estimate.clips, 30);
//! assert_eq!(estimate.panels_cost, dec!(120.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{ceil_units, round_half_up};
use crate::calculations::pattern::PatternGenerator;
use crate::models::{
    CustomPatternSegment, DesignStyle, FeatureArea, LedColor, Panel, PanelColor, PanelType,
    WallDimensions,
};

/// Fixed height of a fluted panel, in feet.
fn panel_height_ft() -> Decimal {
    Decimal::new(95, 1)
}

/// Feet per meter, as used for the LED strip conversion.
fn feet_per_meter() -> Decimal {
    Decimal::new(3281, 3)
}

const MIN_CLIPS_PER_PANEL: u32 = 3;
const MAX_CLIPS_PER_PANEL: u32 = 5;

/// How panel purchases cover walls taller than the 9.5 ft stock height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoveragePolicy {
    /// One run across the width; wall height only gates validity.
    #[default]
    SingleRow,
    /// Full rows of stock-height panels, plus spare panels cut into pieces
    /// to cover the leftover strip at the top.
    MultiRow,
}

/// Complete configuration for one wall panel estimate.
///
/// Defaults mirror a fresh designer form: a 10 × 9.5 ft wall of 6-inch
/// panels in a solid teak finish, three clips per panel, and no lighting,
/// feature area or labor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallPanelConfig {
    pub wall: WallDimensions,
    pub panel_type: PanelType,
    pub panel_price: Decimal,

    pub design_style: DesignStyle,
    pub primary_color: PanelColor,
    pub secondary_color: PanelColor,
    /// Repeating tiling unit, consulted only for [`DesignStyle::Custom`].
    pub custom_pattern: Vec<CustomPatternSegment>,

    pub clips_per_panel: u32,
    pub clip_price: Decimal,

    pub led_strip_feet: Decimal,
    pub led_price_per_meter: Decimal,
    pub led_color: Option<LedColor>,

    pub labor_cost: Decimal,
    pub feature_area: Option<FeatureArea>,
}

impl Default for WallPanelConfig {
    fn default() -> Self {
        Self {
            wall: WallDimensions::new(Decimal::TEN, panel_height_ft()),
            panel_type: PanelType::SixInch,
            panel_price: Decimal::ZERO,
            design_style: DesignStyle::Solid,
            primary_color: PanelColor::Teak,
            secondary_color: PanelColor::WhiteGold,
            custom_pattern: Vec::new(),
            clips_per_panel: MIN_CLIPS_PER_PANEL,
            clip_price: Decimal::ZERO,
            led_strip_feet: Decimal::ZERO,
            led_price_per_meter: Decimal::ZERO,
            led_color: None,
            labor_cost: Decimal::ZERO,
            feature_area: None,
        }
    }
}

/// Bill of materials, panel run and itemized costs for one wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallPanelEstimate {
    pub wall: WallDimensions,
    pub panel_type: PanelType,

    /// Ordered color run across the wall width; always `panels_needed` long.
    pub panels: Vec<Panel>,
    /// Panels in one run across the width.
    pub panels_needed: u32,
    /// Panels to purchase under the coverage policy.
    pub total_panels: u32,
    pub clips: u32,
    pub screws: u32,
    pub roll_plugs: u32,

    /// LED strip length in meters, rounded to two decimals.
    pub led_strip_meters: Decimal,
    pub led_color: Option<LedColor>,
    pub feature_area: Option<FeatureArea>,

    pub panels_cost: Decimal,
    pub clips_cost: Decimal,
    pub led_strip_cost: Decimal,
    pub feature_area_cost: Decimal,
    pub labor_cost: Decimal,
    pub total_cost: Decimal,
}

/// Calculator for wall panel estimates.
#[derive(Debug, Clone)]
pub struct WallPanelEstimator {
    coverage: CoveragePolicy,
}

impl WallPanelEstimator {
    /// Creates a new estimator with the given coverage policy.
    pub fn new(coverage: CoveragePolicy) -> Self {
        Self { coverage }
    }

    /// Calculates the full wall panel estimate.
    ///
    /// Returns `None` when either wall dimension is zero or negative, the
    /// "no valid estimate" signal for transiently empty form state. A
    /// clips-per-panel value outside 3..=5 is clamped into range with a
    /// warning rather than rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fitout_core::calculations::{CoveragePolicy, WallPanelConfig, WallPanelEstimator};
    /// use fitout_core::models::WallDimensions;
    ///
    /// let estimator = WallPanelEstimator::new(CoveragePolicy::SingleRow);
    ///
    /// let config = WallPanelConfig {
    ///     wall: WallDimensions::new(dec!(0), dec!(9.5)),
    ///     ..WallPanelConfig::default()
    /// };
    /// assert!(estimator.estimate(&config).is_none());
    /// ```
    pub fn estimate(
        &self,
        config: &WallPanelConfig,
    ) -> Option<WallPanelEstimate> {
        if !config.wall.is_valid() {
            warn!(
                width = %config.wall.width,
                height = %config.wall.height,
                "wall dimensions must be positive; no estimate produced"
            );
            return None;
        }

        let panels_needed = ceil_units(config.wall.width, config.panel_type.width_ft());
        let total_panels = self.total_panels(panels_needed, config.wall.height);

        let panels = PatternGenerator::generate(
            config.design_style,
            config.primary_color,
            config.secondary_color,
            &config.custom_pattern,
            panels_needed,
        );

        let clips_per_panel = clamped_clips_per_panel(config.clips_per_panel);
        let clips = total_panels.saturating_mul(clips_per_panel);
        let screws = clips;
        let roll_plugs = clips;

        let led_strip_meters = self.led_strip_meters(config.led_strip_feet);

        let panels_cost = round_half_up(Decimal::from(total_panels) * config.panel_price);
        let clips_cost = round_half_up(Decimal::from(clips) * config.clip_price);
        let led_strip_cost = round_half_up(led_strip_meters * config.led_price_per_meter);
        let feature_area_cost = round_half_up(
            config
                .feature_area
                .map(|area| area.cost)
                .unwrap_or(Decimal::ZERO),
        );
        let labor_cost = round_half_up(config.labor_cost);
        let total_cost = round_half_up(
            panels_cost + clips_cost + led_strip_cost + feature_area_cost + labor_cost,
        );

        Some(WallPanelEstimate {
            wall: config.wall,
            panel_type: config.panel_type,
            panels,
            panels_needed,
            total_panels,
            clips,
            screws,
            roll_plugs,
            led_strip_meters,
            led_color: config.led_color,
            feature_area: config.feature_area,
            panels_cost,
            clips_cost,
            led_strip_cost,
            feature_area_cost,
            labor_cost,
            total_cost,
        })
    }

    /// Panels to purchase for the whole wall face.
    ///
    /// `MultiRow` stacks full-height rows and covers the leftover strip by
    /// cutting spare panels: a remainder of `r` feet gets `floor(9.5 / r)`
    /// pieces out of each spare panel.
    fn total_panels(
        &self,
        panels_needed: u32,
        wall_height: Decimal,
    ) -> u32 {
        match self.coverage {
            CoveragePolicy::SingleRow => panels_needed,
            CoveragePolicy::MultiRow => {
                let height = panel_height_ft();
                let full_rows = (wall_height / height).floor().to_u32().unwrap_or(0);
                let remainder = wall_height % height;

                let mut total = full_rows.saturating_mul(panels_needed);
                if remainder > Decimal::ZERO {
                    // remainder < 9.5, so at least one piece per spare panel.
                    let pieces_per_panel = (height / remainder).floor().to_u32().unwrap_or(1);
                    total = total.saturating_add(panels_needed.div_ceil(pieces_per_panel));
                }
                total
            }
        }
    }

    /// LED strip length in meters, rounded half-up to two decimals.
    fn led_strip_meters(
        &self,
        feet: Decimal,
    ) -> Decimal {
        if feet <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_half_up(feet / feet_per_meter())
    }
}

/// Clamps the clips-per-panel selection into the supported 3..=5 range.
fn clamped_clips_per_panel(clips_per_panel: u32) -> u32 {
    let clamped = clips_per_panel.clamp(MIN_CLIPS_PER_PANEL, MAX_CLIPS_PER_PANEL);
    if clamped != clips_per_panel {
        warn!(
            requested = clips_per_panel,
            clamped, "clips per panel outside the supported range"
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn single_row() -> WallPanelEstimator {
        WallPanelEstimator::new(CoveragePolicy::SingleRow)
    }

    fn multi_row() -> WallPanelEstimator {
        WallPanelEstimator::new(CoveragePolicy::MultiRow)
    }

    fn config(
        width: Decimal,
        height: Decimal,
        panel_type: PanelType,
    ) -> WallPanelConfig {
        WallPanelConfig {
            wall: WallDimensions::new(width, height),
            panel_type,
            ..WallPanelConfig::default()
        }
    }

    /// Initializes tracing subscriber for tests that exercise warning paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // validity tests
    // =========================================================================

    #[test]
    fn zero_width_yields_no_estimate() {
        let _guard = init_test_tracing();

        let result = single_row().estimate(&config(dec!(0), dec!(9.5), PanelType::OneFt));

        assert_eq!(result, None);
    }

    #[test]
    fn negative_height_yields_no_estimate() {
        let _guard = init_test_tracing();

        let result = single_row().estimate(&config(dec!(10), dec!(-2), PanelType::OneFt));

        assert_eq!(result, None);
    }

    // =========================================================================
    // panel count tests
    // =========================================================================

    #[test]
    fn one_ft_panels_across_a_ten_ft_wall() {
        let result = single_row()
            .estimate(&config(dec!(10), dec!(9.5), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.panels_needed, 10);
        assert_eq!(result.total_panels, 10);
        assert_eq!(result.panels.len(), 10);
    }

    #[test]
    fn six_inch_panels_double_the_count() {
        let result = single_row()
            .estimate(&config(dec!(10), dec!(9.5), PanelType::SixInch))
            .unwrap();

        assert_eq!(result.panels_needed, 20);
    }

    #[test]
    fn partial_panel_rounds_up() {
        let result = single_row()
            .estimate(&config(dec!(10.2), dec!(9.5), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.panels_needed, 11);
    }

    #[test]
    fn pattern_run_always_matches_panels_needed() {
        for width in [dec!(0.5), dec!(3), dec!(7.25), dec!(10), dec!(24)] {
            for panel_type in [PanelType::SixInch, PanelType::OneFt] {
                let result = single_row()
                    .estimate(&config(width, dec!(9.5), panel_type))
                    .unwrap();
                assert_eq!(result.panels.len(), result.panels_needed as usize);
            }
        }
    }

    // =========================================================================
    // coverage policy tests
    // =========================================================================

    #[test]
    fn multi_row_exact_height_equals_single_row() {
        let result = multi_row()
            .estimate(&config(dec!(10), dec!(9.5), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.total_panels, 10);
    }

    #[test]
    fn multi_row_two_full_rows() {
        let result = multi_row()
            .estimate(&config(dec!(10), dec!(19), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.panels_needed, 10);
        assert_eq!(result.total_panels, 20);
    }

    #[test]
    fn multi_row_remainder_strip_uses_cut_pieces() {
        // 12 ft wall: one full row, 2.5 ft remainder. Each spare panel cuts
        // into floor(9.5 / 2.5) = 3 pieces, so 10 positions need 4 spares.
        let result = multi_row()
            .estimate(&config(dec!(10), dec!(12), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.total_panels, 14);
    }

    #[test]
    fn multi_row_short_wall_cuts_from_spares_only() {
        // 4 ft wall: no full rows; floor(9.5 / 4) = 2 pieces per spare,
        // 10 positions → 5 spares.
        let result = multi_row()
            .estimate(&config(dec!(10), dec!(4), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.panels_needed, 10);
        assert_eq!(result.total_panels, 5);
    }

    #[test]
    fn multi_row_pattern_still_covers_one_run() {
        let result = multi_row()
            .estimate(&config(dec!(10), dec!(19), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.panels.len(), result.panels_needed as usize);
    }

    // =========================================================================
    // fitting tests
    // =========================================================================

    #[test]
    fn clips_screws_and_plugs_match_one_to_one() {
        let mut cfg = config(dec!(10), dec!(9.5), PanelType::OneFt);
        cfg.clips_per_panel = 3;

        let result = single_row().estimate(&cfg).unwrap();

        assert_eq!(result.clips, 30);
        assert_eq!(result.screws, 30);
        assert_eq!(result.roll_plugs, 30);
    }

    #[test]
    fn five_clips_per_panel() {
        let mut cfg = config(dec!(8), dec!(9.5), PanelType::OneFt);
        cfg.clips_per_panel = 5;

        let result = single_row().estimate(&cfg).unwrap();

        assert_eq!(result.clips, 40);
    }

    #[test]
    fn out_of_range_clips_are_clamped() {
        let _guard = init_test_tracing();
        let mut cfg = config(dec!(10), dec!(9.5), PanelType::OneFt);
        cfg.clips_per_panel = 9;

        let result = single_row().estimate(&cfg).unwrap();

        assert_eq!(result.clips, 50);
    }

    #[test]
    fn multi_row_fittings_follow_total_panels() {
        let mut cfg = config(dec!(10), dec!(19), PanelType::OneFt);
        cfg.clips_per_panel = 3;

        let result = multi_row().estimate(&cfg).unwrap();

        assert_eq!(result.total_panels, 20);
        assert_eq!(result.clips, 60);
    }

    // =========================================================================
    // LED strip tests
    // =========================================================================

    #[test]
    fn ten_feet_of_led_strip_is_three_point_oh_five_meters() {
        let mut cfg = config(dec!(10), dec!(9.5), PanelType::OneFt);
        cfg.led_strip_feet = dec!(10);

        let result = single_row().estimate(&cfg).unwrap();

        assert_eq!(result.led_strip_meters, dec!(3.05));
    }

    #[test]
    fn zero_led_strip_stays_zero() {
        let result = single_row()
            .estimate(&config(dec!(10), dec!(9.5), PanelType::OneFt))
            .unwrap();

        assert_eq!(result.led_strip_meters, dec!(0));
        assert_eq!(result.led_strip_cost, dec!(0.00));
    }

    #[test]
    fn led_cost_uses_the_rounded_meter_length() {
        let mut cfg = config(dec!(10), dec!(9.5), PanelType::OneFt);
        cfg.led_strip_feet = dec!(10);
        cfg.led_price_per_meter = dec!(4.00);
        cfg.led_color = Some(LedColor::WarmWhite);

        let result = single_row().estimate(&cfg).unwrap();

        // 3.05 m × 4.00, not the unrounded quotient.
        assert_eq!(result.led_strip_cost, dec!(12.20));
        assert_eq!(result.led_color, Some(LedColor::WarmWhite));
    }

    // =========================================================================
    // cost tests
    // =========================================================================

    #[test]
    fn total_cost_sums_every_line() {
        use crate::models::FeatureTexture;

        let mut cfg = config(dec!(10), dec!(9.5), PanelType::OneFt);
        cfg.panel_price = dec!(12.00);
        cfg.clips_per_panel = 3;
        cfg.clip_price = dec!(0.50);
        cfg.led_strip_feet = dec!(10);
        cfg.led_price_per_meter = dec!(4.00);
        cfg.labor_cost = dec!(150.00);
        cfg.feature_area = Some(FeatureArea {
            width: dec!(5),
            height: dec!(3),
            texture: FeatureTexture::BlackGold,
            blur: true,
            cost: dec!(80.00),
        });

        let result = single_row().estimate(&cfg).unwrap();

        assert_eq!(result.panels_cost, dec!(120.00));
        assert_eq!(result.clips_cost, dec!(15.00));
        assert_eq!(result.led_strip_cost, dec!(12.20));
        assert_eq!(result.feature_area_cost, dec!(80.00));
        assert_eq!(result.labor_cost, dec!(150.00));
        assert_eq!(result.total_cost, dec!(377.20));
    }

    #[test]
    fn absent_optional_lines_cost_nothing() {
        let mut cfg = config(dec!(10), dec!(9.5), PanelType::OneFt);
        cfg.panel_price = dec!(12.00);

        let result = single_row().estimate(&cfg).unwrap();

        assert_eq!(result.feature_area, None);
        assert_eq!(result.feature_area_cost, dec!(0.00));
        assert_eq!(result.labor_cost, dec!(0.00));
        assert_eq!(result.total_cost, dec!(120.00));
    }

    #[test]
    fn multi_row_panel_cost_follows_total_panels() {
        let mut cfg = config(dec!(10), dec!(19), PanelType::OneFt);
        cfg.panel_price = dec!(10.00);

        let result = multi_row().estimate(&cfg).unwrap();

        assert_eq!(result.panels_cost, dec!(200.00));
    }

    // =========================================================================
    // pattern integration tests
    // =========================================================================

    #[test]
    fn design_style_flows_through_to_the_panel_run() {
        let mut cfg = config(dec!(4), dec!(9.5), PanelType::OneFt);
        cfg.design_style = DesignStyle::Alternating;
        cfg.primary_color = PanelColor::Teak;
        cfg.secondary_color = PanelColor::WhiteGold;

        let result = single_row().estimate(&cfg).unwrap();

        let colors: Vec<_> = result.panels.iter().map(|p| p.color).collect();
        assert_eq!(
            colors,
            vec![
                PanelColor::Teak,
                PanelColor::WhiteGold,
                PanelColor::Teak,
                PanelColor::WhiteGold,
            ],
        );
    }

    #[test]
    fn custom_pattern_flows_through_to_the_panel_run() {
        let mut cfg = config(dec!(7), dec!(9.5), PanelType::OneFt);
        cfg.design_style = DesignStyle::Custom;
        cfg.custom_pattern = vec![
            CustomPatternSegment {
                color: PanelColor::BlackGold,
                panels: 3,
            },
            CustomPatternSegment {
                color: PanelColor::WhiteGold,
                panels: 2,
            },
        ];

        let result = single_row().estimate(&cfg).unwrap();

        let colors: Vec<_> = result.panels.iter().map(|p| p.color).collect();
        let mut expected = vec![PanelColor::BlackGold; 3];
        expected.extend(vec![PanelColor::WhiteGold; 2]);
        expected.extend(vec![PanelColor::BlackGold; 2]);
        assert_eq!(colors, expected);
    }
}
