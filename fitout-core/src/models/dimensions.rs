use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room footprint in feet, as supplied by the caller per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length: Decimal,
    pub width: Decimal,
}

impl RoomDimensions {
    pub fn new(
        length: Decimal,
        width: Decimal,
    ) -> Self {
        Self { length, width }
    }

    /// Both sides strictly positive.
    pub fn is_valid(&self) -> bool {
        self.length > Decimal::ZERO && self.width > Decimal::ZERO
    }

    pub fn area(&self) -> Decimal {
        self.length * self.width
    }

    pub fn perimeter(&self) -> Decimal {
        Decimal::TWO * (self.length + self.width)
    }

    /// The longer of the two sides.
    pub fn long_side(&self) -> Decimal {
        self.length.max(self.width)
    }

    /// The shorter of the two sides.
    pub fn short_side(&self) -> Decimal {
        self.length.min(self.width)
    }
}

/// Wall face in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallDimensions {
    pub width: Decimal,
    pub height: Decimal,
}

impl WallDimensions {
    pub fn new(
        width: Decimal,
        height: Decimal,
    ) -> Self {
        Self { width, height }
    }

    /// Both sides strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > Decimal::ZERO && self.height > Decimal::ZERO
    }
}
