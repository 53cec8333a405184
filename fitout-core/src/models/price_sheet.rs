use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit prices for the suspended ceiling bill of materials.
///
/// Every price defaults to zero; a missing price contributes nothing to the
/// total rather than failing the estimate. Binding wire is priced per 500 g
/// unit, nails per nail, everything else per piece or stock length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeilingPriceSheet {
    pub panel: Decimal,
    pub cross_tee: Decimal,
    pub main_tee: Decimal,
    pub wall_angle: Decimal,
    /// Price per 500 g binding wire unit.
    pub binding_unit: Decimal,
    pub nail: Decimal,
    pub led_bulb: Decimal,
    pub decorative_bulb: Decimal,
    pub rivet: Decimal,
    pub super_nail: Decimal,
    pub silicone_tube: Decimal,
    /// Unit price for the generic extra line item.
    pub extra_item: Decimal,
}

/// Caller-supplied pass-through quantities for the ceiling estimate.
///
/// These are not derived from the room dimensions; each is simply multiplied
/// by its unit price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeilingExtras {
    pub led_bulbs: u32,
    pub decorative_bulbs: u32,
    pub rivets: u32,
    pub super_nails: u32,
    pub silicone_tubes: u32,
    pub extra_items: u32,
}
