//! Suspended ceiling material and cost estimates.
//!
//! Converts a room's length and width into the bill of materials for a
//! standard suspended ceiling grid, and prices each line from a
//! [`CeilingPriceSheet`].
//!
//! # Material formulas
//!
//! | Line | Formula |
//! |------|---------|
//! | Panels | `ceil(area / 4)` — each panel covers 4 sq ft (×1.1 with [`WastePolicy::TenPercent`]) |
//! | Cross tees | equal to panels |
//! | Main tee rows | `floor((W − 0.1) / 2)` — rows 2 ft apart across the short side |
//! | Main tees | `ceil(rows × L / 12)` — 12 ft stock length |
//! | Wall angles | `ceil(perimeter / 10)` — 10 ft stock length |
//! | Binding wire | `ceil(area / 200)` units of 500 g |
//! | Nails | 50 per binding unit |
//!
//! LED bulbs, decorative bulbs, rivets, super nails, silicone tubes and the
//! generic extra item are pass-through quantities supplied by the caller.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fitout_core::calculations::{CeilingEstimator, WastePolicy};
//! use fitout_core::models::{CeilingExtras, CeilingPriceSheet, RoomDimensions};
//!
//! let prices = CeilingPriceSheet {
//!     panel: dec!(3.50),
//!     wall_angle: dec!(2.00),
//!     ..CeilingPriceSheet::default()
//! };
//!
//! let estimator = CeilingEstimator::new(prices, WastePolicy::Exact);
//! let room = RoomDimensions::new(dec!(12), dec!(12));
//! let estimate = estimator.estimate(&room, &CeilingExtras::default()).unwrap();
//!
//! assert_eq!(estimate.panels, 36);
//! assert_eq!(estimate.wall_angles, 5);
//! assert_eq!(estimate.total_cost, dec!(136.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{ceil_units, round_half_up};
use crate::models::{CeilingExtras, CeilingPriceSheet, RoomDimensions};

/// Square feet covered by one ceiling panel.
const PANEL_COVERAGE_SQ_FT: u32 = 4;
/// Spacing between main tee rows, in feet.
const MAIN_TEE_SPACING_FT: u32 = 2;
/// Stock length of a main tee, in feet.
const MAIN_TEE_STOCK_FT: u32 = 12;
/// Stock length of a wall angle, in feet.
const WALL_ANGLE_STOCK_FT: u32 = 10;
/// Square feet covered by one binding wire unit.
const BINDING_COVERAGE_SQ_FT: u32 = 200;
/// Grams of binding wire per unit.
const BINDING_GRAMS_PER_UNIT: u32 = 500;
/// Nails per binding coverage unit.
const NAILS_PER_UNIT: u32 = 50;

/// Panel waste allowance applied before rounding up to whole panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WastePolicy {
    /// No allowance; panels cover exactly the room area.
    #[default]
    Exact,
    /// A 10% buffer for offcuts and breakage, applied to panels and cross
    /// tees before rounding up.
    TenPercent,
}

impl WastePolicy {
    fn factor(&self) -> Decimal {
        match self {
            Self::Exact => Decimal::ONE,
            Self::TenPercent => Decimal::new(11, 1),
        }
    }
}

/// Bill of materials and itemized costs for a suspended ceiling.
///
/// Produced fresh on every calculation; quantities are whole units and all
/// costs are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeilingEstimate {
    pub panels: u32,
    pub cross_tees: u32,
    pub main_tees: u32,
    pub wall_angles: u32,
    /// Binding wire in 500 g units.
    pub binding_units: u32,
    /// Binding wire in grams.
    pub binding_grams: u32,
    pub nails: u32,
    /// Pass-through quantities echoed from the request.
    pub extras: CeilingExtras,

    pub panels_cost: Decimal,
    pub cross_tees_cost: Decimal,
    pub main_tees_cost: Decimal,
    pub wall_angles_cost: Decimal,
    /// Priced per 500 g unit, not per gram.
    pub binding_cost: Decimal,
    pub nails_cost: Decimal,
    pub led_bulbs_cost: Decimal,
    pub decorative_bulbs_cost: Decimal,
    pub rivets_cost: Decimal,
    pub super_nails_cost: Decimal,
    pub silicone_cost: Decimal,
    pub extra_cost: Decimal,
    pub total_cost: Decimal,
}

/// Calculator for suspended ceiling estimates.
///
/// Holds the unit prices and the waste policy; [`Self::estimate`] is a pure
/// function of the room dimensions and pass-through quantities.
#[derive(Debug, Clone)]
pub struct CeilingEstimator {
    price_sheet: CeilingPriceSheet,
    waste_policy: WastePolicy,
}

impl CeilingEstimator {
    /// Creates a new estimator with the given prices and waste policy.
    pub fn new(
        price_sheet: CeilingPriceSheet,
        waste_policy: WastePolicy,
    ) -> Self {
        Self {
            price_sheet,
            waste_policy,
        }
    }

    /// Calculates the full ceiling bill of materials.
    ///
    /// Returns `None` when either room dimension is zero or negative. This is
    /// the "no valid estimate" signal for transiently empty form state, not an
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fitout_core::calculations::{CeilingEstimator, WastePolicy};
    /// use fitout_core::models::{CeilingExtras, CeilingPriceSheet, RoomDimensions};
    ///
    /// let estimator =
    ///     CeilingEstimator::new(CeilingPriceSheet::default(), WastePolicy::Exact);
    ///
    /// let invalid = RoomDimensions::new(dec!(0), dec!(5));
    /// assert!(estimator.estimate(&invalid, &CeilingExtras::default()).is_none());
    /// ```
    pub fn estimate(
        &self,
        room: &RoomDimensions,
        extras: &CeilingExtras,
    ) -> Option<CeilingEstimate> {
        if !room.is_valid() {
            warn!(
                length = %room.length,
                width = %room.width,
                "room dimensions must be positive; no estimate produced"
            );
            return None;
        }

        let area = room.area();

        let panels = self.panel_count(area);
        let cross_tees = panels;
        let main_tee_rows = self.main_tee_rows(room.short_side());
        let main_tees = self.main_tee_count(main_tee_rows, room.long_side());
        let wall_angles = ceil_units(room.perimeter(), Decimal::from(WALL_ANGLE_STOCK_FT));
        let binding_units = ceil_units(area, Decimal::from(BINDING_COVERAGE_SQ_FT));
        let binding_grams = binding_units.saturating_mul(BINDING_GRAMS_PER_UNIT);
        let nails = binding_units.saturating_mul(NAILS_PER_UNIT);

        let prices = &self.price_sheet;
        let panels_cost = line_cost(panels, prices.panel);
        let cross_tees_cost = line_cost(cross_tees, prices.cross_tee);
        let main_tees_cost = line_cost(main_tees, prices.main_tee);
        let wall_angles_cost = line_cost(wall_angles, prices.wall_angle);
        let binding_cost = line_cost(binding_units, prices.binding_unit);
        let nails_cost = line_cost(nails, prices.nail);
        let led_bulbs_cost = line_cost(extras.led_bulbs, prices.led_bulb);
        let decorative_bulbs_cost = line_cost(extras.decorative_bulbs, prices.decorative_bulb);
        let rivets_cost = line_cost(extras.rivets, prices.rivet);
        let super_nails_cost = line_cost(extras.super_nails, prices.super_nail);
        let silicone_cost = line_cost(extras.silicone_tubes, prices.silicone_tube);
        let extra_cost = line_cost(extras.extra_items, prices.extra_item);

        let total_cost = round_half_up(
            panels_cost
                + cross_tees_cost
                + main_tees_cost
                + wall_angles_cost
                + binding_cost
                + nails_cost
                + led_bulbs_cost
                + decorative_bulbs_cost
                + rivets_cost
                + super_nails_cost
                + silicone_cost
                + extra_cost,
        );

        Some(CeilingEstimate {
            panels,
            cross_tees,
            main_tees,
            wall_angles,
            binding_units,
            binding_grams,
            nails,
            extras: *extras,
            panels_cost,
            cross_tees_cost,
            main_tees_cost,
            wall_angles_cost,
            binding_cost,
            nails_cost,
            led_bulbs_cost,
            decorative_bulbs_cost,
            rivets_cost,
            super_nails_cost,
            silicone_cost,
            extra_cost,
            total_cost,
        })
    }

    /// Whole panels needed to cover the area, after the waste allowance.
    fn panel_count(
        &self,
        area: Decimal,
    ) -> u32 {
        let covered = area * self.waste_policy.factor();
        ceil_units(covered, Decimal::from(PANEL_COVERAGE_SQ_FT))
    }

    /// Main tee rows across the short side, spaced 2 ft apart.
    ///
    /// The 0.1 ft subtraction keeps a room whose short side is an exact
    /// multiple of the spacing from picking up a row against the far wall.
    fn main_tee_rows(
        &self,
        short_side: Decimal,
    ) -> u32 {
        let usable = short_side - Decimal::new(1, 1);
        (usable / Decimal::from(MAIN_TEE_SPACING_FT))
            .floor()
            .to_u32()
            .unwrap_or(0)
    }

    /// Main tee sticks covering `rows` runs of the long side.
    fn main_tee_count(
        &self,
        rows: u32,
        long_side: Decimal,
    ) -> u32 {
        let total_length = Decimal::from(rows) * long_side;
        ceil_units(total_length, Decimal::from(MAIN_TEE_STOCK_FT))
    }
}

fn line_cost(
    quantity: u32,
    unit_price: Decimal,
) -> Decimal {
    round_half_up(Decimal::from(quantity) * unit_price)
}
