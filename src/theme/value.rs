//! Resolved token values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::css::scalar::{format_number, Scalar};

/// A resolved theme token value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum TokenValue {
    /// A color: hex (`#0078d4`) or functional (`rgba(0, 0, 0, 0.4)`).
    Color(String),
    /// A length such as `8px` or `0.25rem`.
    Length(Scalar),
    /// A unitless number such as a font weight or opacity.
    Number(f64),
    /// Anything else, written verbatim (`transparent`, `"Segoe UI", sans-serif`).
    Keyword(String),
}

impl TokenValue {
    /// Shorthand for a color token.
    pub fn color(s: impl Into<String>) -> Self {
        TokenValue::Color(s.into())
    }

    /// Shorthand for a pixel length token.
    pub fn px(value: f64) -> Self {
        TokenValue::Length(Scalar::px(value))
    }
}

impl FromStr for TokenValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla("];
        if s.starts_with('#') || COLOR_FUNCTIONS.iter().any(|f| s.starts_with(f)) {
            return Ok(TokenValue::Color(s.to_string()));
        }
        if s.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
            if let Ok(n) = s.parse::<f64>() {
                return Ok(TokenValue::Number(n));
            }
            if let Ok(scalar) = s.parse::<Scalar>() {
                return Ok(TokenValue::Length(scalar));
            }
        }
        Ok(TokenValue::Keyword(s.to_string()))
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::from(s.to_string())
    }
}

impl From<Scalar> for TokenValue {
    fn from(s: Scalar) -> Self {
        TokenValue::Length(s)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(c) => f.write_str(c),
            TokenValue::Length(s) => write!(f, "{s}"),
            TokenValue::Number(n) => f.write_str(&format_number(*n)),
            TokenValue::Keyword(k) => f.write_str(k),
        }
    }
}
