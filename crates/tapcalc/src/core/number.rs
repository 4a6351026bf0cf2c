//! Typed numeric values parsed from display text

use serde::Serialize;

/// A number as the accumulator sees it.
///
/// The variant is chosen by the text it came from: anything containing a
/// decimal point is a float, everything else is an integer. Parsing never
/// fails; unparsable text becomes zero of the matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Number {
    /// Integer operand
    Integer(i64),
    /// Floating-point operand
    Float(f64),
}

impl Default for Number {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl Number {
    /// Parses display text with default-to-zero fallback
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.contains('.') {
            Self::Float(parse_float(text))
        } else {
            Self::Integer(text.parse().unwrap_or(0))
        }
    }

    /// Returns true for the float variant
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Widens to f64
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => f.write_str(&format_float(x)),
        }
    }
}

/// Float parse with default-to-zero fallback
pub(crate) fn parse_float(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Formats a float so it reads back as a float.
///
/// Finite values always contain a '.', including in exponent form ("5.0",
/// "0.5", "1.0e16", "1.0e-6").
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        }
    } else {
        let text = format!("{value:?}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !mantissa.contains('.') => format!("{mantissa}.0e{exp}"),
            _ => text,
        }
    }
}
