/*!
Common error types for the resistor color-code library.
*/

use crate::codec::BandRole;
use crate::color::Color;
use thiserror::Error;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, CodeError>;

/// Errors produced by the color-code codec and parsers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodeError {
    /// A band color has no definition for the role it occupies, or a
    /// mandatory band is missing entirely (`color` is `None`)
    #[error("band {position} ({role}): {got} is not a valid {role} color", got = display_color(.color))]
    InvalidColor {
        position: usize,
        role: BandRole,
        color: Option<Color>,
    },

    /// Encoding requires a multiplier exponent outside the representable
    /// range of -2..=9
    #[error("multiplier exponent {exponent} is not representable by any band color")]
    UnrepresentableExponent { exponent: i32 },

    /// Encode input that is zero, negative or non-finite
    #[error("resistance {0} is not a positive finite value")]
    InvalidResistance(f64),

    /// Text that cannot be interpreted as a resistance or color name
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// A band count other than 4, 5 or 6
    #[error("invalid band count: {0} (expected 4, 5 or 6)")]
    InvalidBandCount(u8),
}

impl CodeError {
    /// Create a new parse failure with a message
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseFailure(msg.into())
    }
}

fn display_color(color: &Option<Color>) -> String {
    match color {
        Some(c) => format!("'{}'", c.as_str()),
        None => "a missing band".to_string(),
    }
}
