//! Measurement units used by the layout model.

use std::fmt;
use std::str::FromStr;

/// Twips per centimeter, for page-geometry conversion.
pub const TWIPS_PER_CM: f64 = 567.0;

/// Screen pixels per twip, for the preview page padding.
pub const PX_PER_TWIP: f64 = 0.0667;

/// A size in points, always rendered with its `pt` suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(transparent))]
pub struct Pt(pub f64);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}pt", self.0 as i64)
        } else {
            write!(f, "{}pt", self.0)
        }
    }
}

/// A length in twips (1/20 pt, 1/1440 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(transparent))]
pub struct Twips(pub u32);

impl Twips {
    /// Whole centimeters, rounded to nearest. Page setup tolerates the
    /// precision loss; 2098 twips (3.7cm) rounds to 4cm.
    pub fn to_cm_rounded(self) -> u32 {
        (self.0 as f64 / TWIPS_PER_CM).round() as u32
    }

    /// Unrounded pixel equivalent for the on-screen page container.
    pub fn to_px(self) -> f64 {
        self.0 as f64 * PX_PER_TWIP
    }
}

/// Line height: a fixed point value or a unitless multiplier.
///
/// Consumers branch on the form; both display as valid CSS `line-height`
/// values (`28pt` vs `1.5`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(try_from = "String", into = "String"))]
pub enum LineHeight {
    Fixed(Pt),
    Multiple(f64),
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Fixed(pt) => write!(f, "{pt}"),
            LineHeight::Multiple(m) => write!(f, "{m}"),
        }
    }
}

impl FromStr for LineHeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(value) = s.strip_suffix("pt") {
            let pt: f64 = value
                .trim()
                .parse()
                .map_err(|_| format!("invalid line height: {s:?}"))?;
            Ok(LineHeight::Fixed(Pt(pt)))
        } else {
            let multiple: f64 = s.parse().map_err(|_| format!("invalid line height: {s:?}"))?;
            Ok(LineHeight::Multiple(multiple))
        }
    }
}

impl TryFrom<String> for LineHeight {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LineHeight> for String {
    fn from(lh: LineHeight) -> String {
        lh.to_string()
    }
}
