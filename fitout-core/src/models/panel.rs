use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Finish of a fluted wall panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelColor {
    WhiteGold,
    Teak,
    BlackGold,
    LightBrown,
}

impl PanelColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhiteGold => "white-gold",
            Self::Teak => "teak",
            Self::BlackGold => "black-gold",
            Self::LightBrown => "light-brown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "white-gold" => Some(Self::WhiteGold),
            "teak" => Some(Self::Teak),
            "black-gold" => Some(Self::BlackGold),
            "light-brown" => Some(Self::LightBrown),
            _ => None,
        }
    }
}

/// A single panel position in the ordered run across the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub color: PanelColor,
}

impl Panel {
    pub fn new(color: PanelColor) -> Self {
        Self { color }
    }
}

/// Stock width of a fluted panel. Panels come in a fixed 9.5 ft height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelType {
    /// 6-inch panel, 0.5 ft wide.
    SixInch,
    /// 1-ft panel.
    OneFt,
}

impl PanelType {
    /// Panel width in feet.
    pub fn width_ft(&self) -> Decimal {
        match self {
            Self::SixInch => Decimal::new(5, 1),
            Self::OneFt => Decimal::ONE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SixInch => "6-inch",
            Self::OneFt => "1-ft",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "6-inch" => Some(Self::SixInch),
            "1-ft" => Some(Self::OneFt),
            _ => None,
        }
    }
}

/// Algorithm used to assign colors across the ordered panel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignStyle {
    Solid,
    Alternating,
    CenterStage,
    GradientFlow,
    Custom,
}

impl DesignStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Alternating => "alternating",
            Self::CenterStage => "center-stage",
            Self::GradientFlow => "gradient-flow",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "solid" => Some(Self::Solid),
            "alternating" => Some(Self::Alternating),
            "center-stage" => Some(Self::CenterStage),
            "gradient-flow" => Some(Self::GradientFlow),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// One segment of the repeating tiling unit used by [`DesignStyle::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPatternSegment {
    pub color: PanelColor,
    pub panels: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn panel_color_round_trips_through_strings() {
        for color in [
            PanelColor::WhiteGold,
            PanelColor::Teak,
            PanelColor::BlackGold,
            PanelColor::LightBrown,
        ] {
            assert_eq!(PanelColor::parse(color.as_str()), Some(color));
        }
        assert_eq!(PanelColor::parse("mahogany"), None);
    }

    #[test]
    fn panel_type_widths() {
        assert_eq!(PanelType::SixInch.width_ft(), dec!(0.5));
        assert_eq!(PanelType::OneFt.width_ft(), dec!(1));
    }

    #[test]
    fn panel_type_round_trips_through_strings() {
        assert_eq!(PanelType::parse("6-inch"), Some(PanelType::SixInch));
        assert_eq!(PanelType::parse("1-ft"), Some(PanelType::OneFt));
        assert_eq!(PanelType::parse("2-ft"), None);
    }

    #[test]
    fn design_style_round_trips_through_strings() {
        for style in [
            DesignStyle::Solid,
            DesignStyle::Alternating,
            DesignStyle::CenterStage,
            DesignStyle::GradientFlow,
            DesignStyle::Custom,
        ] {
            assert_eq!(DesignStyle::parse(style.as_str()), Some(style));
        }
        assert_eq!(DesignStyle::parse("checkerboard"), None);
    }
}
