//! Common utility functions for material estimates.
//!
//! This module provides shared functionality used across both estimators,
//! including monetary rounding and stock-unit coverage division.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero). The same rule covers the
/// feet-to-meters conversion of LED strip lengths.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fitout_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(3.0478)), dec!(3.05));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Number of fixed-size stock units needed to cover a quantity.
///
/// Computes `ceil(quantity / per_unit)`. A non-positive quantity or unit size
/// yields zero units; counts too large for `u32` saturate.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fitout_core::calculations::common::ceil_units;
///
/// // 48 ft of perimeter covered by 10 ft wall angle sticks.
/// assert_eq!(ceil_units(dec!(48), dec!(10)), 5);
/// // Exact multiples need no extra unit.
/// assert_eq!(ceil_units(dec!(40), dec!(10)), 4);
/// ```
pub fn ceil_units(
    quantity: Decimal,
    per_unit: Decimal,
) -> u32 {
    if quantity <= Decimal::ZERO || per_unit <= Decimal::ZERO {
        return 0;
    }
    (quantity / per_unit).ceil().to_u32().unwrap_or(u32::MAX)
}
