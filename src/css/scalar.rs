//! CSS scalar values: Scalar, Unit (px, em, rem, %, vw, vh, ms, s, deg).

use std::fmt;
use std::str::FromStr;

/// A CSS length/time/angle unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Absolute pixels.
    Px,
    /// Relative to the element's font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Percentage of the containing dimension.
    Percent,
    /// Viewport width percentage.
    Vw,
    /// Viewport height percentage.
    Vh,
    /// Grid fraction.
    Fr,
    /// Milliseconds (transitions/animations).
    Ms,
    /// Seconds.
    S,
    /// Degrees.
    Deg,
}

impl Unit {
    /// The suffix written after the number in CSS text.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Fr => "fr",
            Unit::Ms => "ms",
            Unit::S => "s",
            Unit::Deg => "deg",
        }
    }

    /// Look up a unit by its CSS suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix {
            "px" => Unit::Px,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "%" => Unit::Percent,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "fr" => Unit::Fr,
            "ms" => Unit::Ms,
            "s" => Unit::S,
            "deg" => Unit::Deg,
            _ => return None,
        };
        Some(unit)
    }
}

/// A number with a unit, e.g. `2px`, `1.5rem`, `50%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub value: f64,
    pub unit: Unit,
}

impl Scalar {
    /// Create a scalar with an explicit unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a scalar in pixels.
    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Create a scalar in root-em units.
    pub fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// Create a scalar as a percentage.
    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }
}

/// Write a number the way CSS expects it: integral values without a
/// fractional part, everything else with the shortest float representation.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

/// Error returned when a string is not a `<number><unit>` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scalar: {0:?}")]
pub struct ParseScalarError(pub String);

impl FromStr for Scalar {
    type Err = ParseScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .ok_or_else(|| ParseScalarError(s.to_string()))?;
        let (number, suffix) = s.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| ParseScalarError(s.to_string()))?;
        let unit = Unit::from_suffix(suffix).ok_or_else(|| ParseScalarError(s.to_string()))?;
        Ok(Scalar::new(value, unit))
    }
}
