//! Utility functions for the poster: value colors and number formatting.

use crate::models::ValueFormat;
use plotters::style::RGBColor;

/// Thai PM2.5 air-quality bands, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiBand {
    /// Very good air (blue).
    VeryGood,
    /// Good air (green).
    Good,
    /// Moderate (yellow).
    Moderate,
    /// Starting to affect health (orange).
    StartsAffecting,
    /// Affects health (red).
    Unhealthy,
}

/// Inclusive upper bounds in µg/m³, checked in ascending order.
const BANDS: [(f64, AqiBand); 4] = [
    (15.0, AqiBand::VeryGood),
    (25.0, AqiBand::Good),
    (37.5, AqiBand::Moderate),
    (75.0, AqiBand::StartsAffecting),
];

/// Everything above the last bound.
const CATCH_ALL: AqiBand = AqiBand::Unhealthy;

impl AqiBand {
    /// First band whose upper bound is >= `value`; NaN lands in the catch-all.
    pub fn classify(value: f64) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| value <= *upper)
            .map(|(_, band)| *band)
            .unwrap_or(CATCH_ALL)
    }

    pub fn color(self) -> RGBColor {
        match self {
            AqiBand::VeryGood => RGBColor(0, 157, 224),
            AqiBand::Good => RGBColor(0, 175, 80),
            AqiBand::Moderate => RGBColor(255, 192, 0),
            AqiBand::StartsAffecting => RGBColor(255, 122, 0),
            AqiBand::Unhealthy => RGBColor(237, 28, 36),
        }
    }

    /// All bands from least to most severe.
    pub fn all() -> [AqiBand; 5] {
        [
            AqiBand::VeryGood,
            AqiBand::Good,
            AqiBand::Moderate,
            AqiBand::StartsAffecting,
            AqiBand::Unhealthy,
        ]
    }
}

/// Display color for a PM2.5 value.
#[inline]
pub fn pm25_color(value: f64) -> RGBColor {
    AqiBand::classify(value).color()
}

/// Print a value the way the poster always has: shortest round-trip form.
/// Integer columns print without decimals (`45`); otherwise integral values
/// keep one decimal (`75.0`, not `75`).
pub fn format_value(value: f64, format: ValueFormat) -> String {
    let integral = value.is_finite() && value.fract() == 0.0 && value.abs() < 1.0e16;
    match format {
        ValueFormat::Integer if integral => format!("{}", value as i64),
        ValueFormat::Decimal if integral => format!("{value:.1}"),
        _ => format!("{value}"),
    }
}
