//! Color pattern generation for the wall panel run.
//!
//! Given a panel count and a design style, produces the ordered sequence of
//! panel colors the layout collaborator renders across the wall width. All
//! styles are deterministic and index-based; there is no randomness.
//!
//! # Example
//!
//! ```
//! use fitout_core::calculations::PatternGenerator;
//! use fitout_core::models::{DesignStyle, PanelColor};
//!
//! let panels = PatternGenerator::generate(
//!     DesignStyle::Alternating,
//!     PanelColor::Teak,
//!     PanelColor::WhiteGold,
//!     &[],
//!     4,
//! );
//!
//! let colors: Vec<_> = panels.iter().map(|p| p.color).collect();
//! assert_eq!(
//!     colors,
//!     vec![
//!         PanelColor::Teak,
//!         PanelColor::WhiteGold,
//!         PanelColor::Teak,
//!         PanelColor::WhiteGold,
//!     ],
//! );
//! ```

use tracing::warn;

use crate::models::{CustomPatternSegment, DesignStyle, Panel, PanelColor};

/// Generator for per-panel color assignments.
#[derive(Debug, Clone, Copy)]
pub struct PatternGenerator;

impl PatternGenerator {
    /// Color used when a custom pattern has no usable segments.
    pub const FALLBACK_COLOR: PanelColor = PanelColor::WhiteGold;

    /// Produces the ordered panel run for the given style.
    ///
    /// The result has exactly `panels_needed` entries, or is empty when
    /// `panels_needed` is zero. `custom_pattern` is only consulted for
    /// [`DesignStyle::Custom`].
    pub fn generate(
        style: DesignStyle,
        primary: PanelColor,
        secondary: PanelColor,
        custom_pattern: &[CustomPatternSegment],
        panels_needed: u32,
    ) -> Vec<Panel> {
        if panels_needed == 0 {
            return Vec::new();
        }
        let count = panels_needed as usize;

        match style {
            DesignStyle::Solid => vec![Panel::new(primary); count],
            DesignStyle::Alternating => Self::alternating(primary, secondary, count),
            DesignStyle::CenterStage => Self::center_stage(primary, secondary, count),
            DesignStyle::GradientFlow => Self::gradient_flow(primary, secondary, count),
            DesignStyle::Custom => Self::custom(custom_pattern, count),
        }
    }

    /// Even indices take the primary color, odd indices the secondary.
    fn alternating(
        primary: PanelColor,
        secondary: PanelColor,
        count: usize,
    ) -> Vec<Panel> {
        (0..count)
            .map(|i| {
                if i % 2 == 0 {
                    Panel::new(primary)
                } else {
                    Panel::new(secondary)
                }
            })
            .collect()
    }

    /// A secondary-colored center block flanked by primary-colored sides.
    ///
    /// The center takes a third of the run (at least one panel); the left
    /// side takes half of what remains. Integer-division leftover lands on
    /// the right side, so the right side may be one panel wider than the
    /// left when the run does not divide evenly.
    fn center_stage(
        primary: PanelColor,
        secondary: PanelColor,
        count: usize,
    ) -> Vec<Panel> {
        let center_size = (count / 3).max(1);
        let side_size = count.saturating_sub(center_size) / 2;

        let mut panels = Vec::with_capacity(count);
        panels.extend(std::iter::repeat_n(Panel::new(primary), side_size));
        panels.extend(std::iter::repeat_n(Panel::new(secondary), center_size));
        // Integer-division leftover fills the right side.
        panels.resize(count, Panel::new(primary));
        panels
    }

    /// A hard 50/50 split by index: the first half of the run takes the
    /// primary color, the rest the secondary. A single panel is defined to
    /// be primary.
    fn gradient_flow(
        primary: PanelColor,
        secondary: PanelColor,
        count: usize,
    ) -> Vec<Panel> {
        if count == 1 {
            return vec![Panel::new(primary)];
        }
        // i / (count - 1) < 0.5, kept in integer arithmetic.
        (0..count)
            .map(|i| {
                if 2 * i < count - 1 {
                    Panel::new(primary)
                } else {
                    Panel::new(secondary)
                }
            })
            .collect()
    }

    /// Walks the pattern segments cyclically until the run is full, truncating
    /// a partial segment at the boundary. Zero-panel segments are skipped; a
    /// pattern with no usable segments falls back to a uniform run of
    /// [`Self::FALLBACK_COLOR`].
    fn custom(
        custom_pattern: &[CustomPatternSegment],
        count: usize,
    ) -> Vec<Panel> {
        let segments: Vec<&CustomPatternSegment> =
            custom_pattern.iter().filter(|s| s.panels > 0).collect();

        if segments.is_empty() {
            warn!(
                segment_count = custom_pattern.len(),
                "custom pattern has no usable segments; falling back to a uniform run"
            );
            return vec![Panel::new(Self::FALLBACK_COLOR); count];
        }

        let mut panels = Vec::with_capacity(count);
        'tiling: loop {
            for segment in &segments {
                for _ in 0..segment.panels {
                    if panels.len() == count {
                        break 'tiling;
                    }
                    panels.push(Panel::new(segment.color));
                }
            }
        }
        panels
    }
}
