//! Design token values.
//!
//! A token value is the atomic unit of visual configuration: a CSS-like
//! string (`"0.75rem"`, `"#2D3B45"`, `"solid"`), a bare number (font
//! weights, z-indices), or a nested mapping for grouped tokens.
//!
//! # Example
//!
//! ```
//! use veneer_tokens::TokenValue;
//!
//! let width = TokenValue::from("0.0625rem");
//! let weight = TokenValue::from(700);
//!
//! // Values render the way they are written into CSS shorthands
//! assert_eq!(width.to_string(), "0.0625rem");
//! assert_eq!(weight.to_string(), "700");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single design token value.
///
/// Serde deserialization is untagged, so theme files write values naturally:
/// `fontWeightBold = 700` or `style = "solid"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A numeric value (font weight, z-index, unitless line height).
    Number(f64),
    /// A textual value (lengths, colors, keywords, shorthand strings).
    Text(String),
    /// A nested mapping of token name to value.
    Map(BTreeMap<String, TokenValue>),
}

impl TokenValue {
    /// Get the textual value, if this is a text token.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number token.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the nested mapping, if this is a map token.
    pub fn as_map(&self) -> Option<&BTreeMap<String, TokenValue>> {
        match self {
            TokenValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Check whether this value is a scalar (text or number).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, TokenValue::Map(_))
    }
}

impl fmt::Display for TokenValue {
    /// Render the value as it would appear in a CSS property.
    ///
    /// Whole numbers drop their fractional part (`700`, not `700.0`).
    /// Nested maps render as an empty string; they are not meant to be
    /// interpolated directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            TokenValue::Map(_) => Ok(()),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Number(value as f64)
    }
}
