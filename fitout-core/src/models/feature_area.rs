use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marble texture of a feature area backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureTexture {
    BlackGold,
    WhiteGold,
    WhiteBlueGold,
    WhiteDarkGold,
}

impl FeatureTexture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlackGold => "black-gold",
            Self::WhiteGold => "white-gold",
            Self::WhiteBlueGold => "white-blue-gold",
            Self::WhiteDarkGold => "white-dark-gold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "black-gold" => Some(Self::BlackGold),
            "white-gold" => Some(Self::WhiteGold),
            "white-blue-gold" => Some(Self::WhiteBlueGold),
            "white-dark-gold" => Some(Self::WhiteDarkGold),
            _ => None,
        }
    }
}

/// An accent zone (e.g. a TV backdrop) with a flat material cost.
///
/// The width, height, texture and blur flag are carried for the layout
/// collaborator; only `cost` enters the estimate arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureArea {
    pub width: Decimal,
    pub height: Decimal,
    pub texture: FeatureTexture,
    pub blur: bool,
    pub cost: Decimal,
}

/// LED strip color temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedColor {
    WarmWhite,
    CoolWhite,
}

impl LedColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WarmWhite => "warm-white",
            Self::CoolWhite => "cool-white",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "warm-white" => Some(Self::WarmWhite),
            "cool-white" => Some(Self::CoolWhite),
            _ => None,
        }
    }
}
