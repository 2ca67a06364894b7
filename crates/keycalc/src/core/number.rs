//! Numeric values and entry validation helpers
//!
//! Every value the calculator stores goes through [`Number::from_f64`], which
//! collapses integral floats to integers so `4.0` is kept and shown as `4`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calculator value: an integer when the value is integral, a float otherwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integral value that fits in `i64`
    Integer(i64),
    /// Any other finite value
    Float(f64),
}

impl Number {
    /// Normalizes a float: integral values that fit in `i64` become integers.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Self::Integer(value as i64)
        } else {
            Self::Float(value)
        }
    }

    /// Parses entry text into a normalized number.
    ///
    /// Returns `None` for anything that is not a finite decimal number,
    /// including partial input such as `"."` or `"-"`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(value) = text.parse::<i64>() {
            return Some(Self::Integer(value));
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Self::from_f64(value)),
            _ => None,
        }
    }

    /// Returns the value as a float
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns true if the value is zero
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Returns the normalized negation
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Integer(i) => i
                .checked_neg()
                .map_or_else(|| Self::from_f64(-(i as f64)), Self::Integer),
            Self::Float(f) => Self::from_f64(-f),
        }
    }
}

/// Floats at or above this magnitude are shown in scientific notation
const SCIENTIFIC_ABOVE: f64 = 1e16;
/// Non-zero floats below this magnitude are shown in scientific notation
const SCIENTIFIC_BELOW: f64 = 1e-4;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) if is_extreme(*v) => write_scientific(f, *v),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

fn is_extreme(value: f64) -> bool {
    value != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_ABOVE).contains(&value.abs())
}

/// Writes `1e+300` / `-2.5e-07`: explicit exponent sign, at least two digits
fn write_scientific(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// Error returned when text is not a valid number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid number: {0:?}")]
pub struct ParseNumberError(pub String);

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseNumberError(s.to_string()))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

/// Returns true if `ch` is a digit or a decimal point
#[must_use]
pub fn is_num_or_dot(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// Returns true if the text has no characters
#[must_use]
pub fn is_empty(text: &str) -> bool {
    text.is_empty()
}

/// Returns true if the text parses as a finite number
#[must_use]
pub fn is_valid_number(text: &str) -> bool {
    Number::parse(text).is_some()
}
