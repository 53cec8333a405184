mod dimensions;
mod feature_area;
mod panel;
mod price_sheet;

pub use dimensions::{RoomDimensions, WallDimensions};
pub use feature_area::{FeatureArea, FeatureTexture, LedColor};
pub use panel::{CustomPatternSegment, DesignStyle, Panel, PanelColor, PanelType};
pub use price_sheet::{CeilingExtras, CeilingPriceSheet};
