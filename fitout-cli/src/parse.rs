//! String parsers for the flag values that map onto core model types.

use fitout_core::models::{CustomPatternSegment, DesignStyle, LedColor, PanelColor, PanelType};
use thiserror::Error;

/// Errors that can occur while parsing flag values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown panel type '{0}' (expected '6-inch' or '1-ft')")]
    UnknownPanelType(String),

    #[error(
        "unknown color '{0}' (expected 'white-gold', 'teak', 'black-gold' or 'light-brown')"
    )]
    UnknownColor(String),

    #[error(
        "unknown design style '{0}' (expected 'solid', 'alternating', 'center-stage', \
         'gradient-flow' or 'custom')"
    )]
    UnknownStyle(String),

    #[error("unknown LED color '{0}' (expected 'warm-white' or 'cool-white')")]
    UnknownLedColor(String),

    #[error("bad pattern segment '{0}' (expected 'color:count', e.g. 'black-gold:3')")]
    BadPatternSegment(String),

    #[error("bad panel count '{0}' in pattern segment (expected a whole number of 1 or more)")]
    BadPanelCount(String),
}

pub fn panel_type(s: &str) -> Result<PanelType, ParseError> {
    PanelType::parse(s).ok_or_else(|| ParseError::UnknownPanelType(s.to_string()))
}

pub fn panel_color(s: &str) -> Result<PanelColor, ParseError> {
    PanelColor::parse(s).ok_or_else(|| ParseError::UnknownColor(s.to_string()))
}

pub fn design_style(s: &str) -> Result<DesignStyle, ParseError> {
    DesignStyle::parse(s).ok_or_else(|| ParseError::UnknownStyle(s.to_string()))
}

pub fn led_color(s: &str) -> Result<LedColor, ParseError> {
    LedColor::parse(s).ok_or_else(|| ParseError::UnknownLedColor(s.to_string()))
}

/// Parses a repeating pattern like `black-gold:3,white-gold:2`.
///
/// Each comma-separated segment is `color:count`; counts must be whole
/// numbers of at least one panel.
pub fn custom_pattern(s: &str) -> Result<Vec<CustomPatternSegment>, ParseError> {
    s.split(',')
        .map(|segment| {
            let segment = segment.trim();
            let (color, count) = segment
                .split_once(':')
                .ok_or_else(|| ParseError::BadPatternSegment(segment.to_string()))?;
            let color = panel_color(color.trim())?;
            let panels: u32 = count
                .trim()
                .parse()
                .map_err(|_| ParseError::BadPanelCount(count.trim().to_string()))?;
            if panels == 0 {
                return Err(ParseError::BadPanelCount(count.trim().to_string()));
            }
            Ok(CustomPatternSegment { color, panels })
        })
        .collect()
}
