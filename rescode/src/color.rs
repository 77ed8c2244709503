/*!
Band color tables.

This module defines the band colors and their four independent semantic
roles: significant digit, multiplier exponent, tolerance percentage and
temperature coefficient. A color may be valid in some roles and not in
others, so every role lookup returns an `Option` rather than a default —
zero is itself a valid digit and a valid exponent.
*/

use crate::error::CodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The thirteen band colors, including the "no color" tolerance marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
    #[serde(rename = "none")]
    NoColor,
}

/// Digit colors in digit-value order (black = 0 ... white = 9)
pub const DIGIT_COLORS: [Color; 10] = [
    Color::Black,
    Color::Brown,
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Violet,
    Color::Grey,
    Color::White,
];

impl Color {
    /// Significant-digit value of this color (0-9), if it has one
    pub fn digit(self) -> Option<u8> {
        DIGIT_COLORS.iter().position(|&c| c == self).map(|i| i as u8)
    }

    /// Multiplier exponent of this color (-2..=9), if it has one
    pub fn exponent(self) -> Option<i32> {
        match self {
            Self::Silver => Some(-2),
            Self::Gold => Some(-1),
            Self::NoColor => None,
            other => other.digit().map(i32::from),
        }
    }

    /// Tolerance percentage of this color, if it has one
    pub fn tolerance(self) -> Option<f64> {
        match self {
            Self::NoColor => Some(20.0),
            Self::Silver => Some(10.0),
            Self::Gold => Some(5.0),
            Self::Brown => Some(1.0),
            Self::Red => Some(2.0),
            Self::Green => Some(0.5),
            Self::Blue => Some(0.25),
            Self::Violet => Some(0.10),
            Self::Grey => Some(0.05),
            _ => None,
        }
    }

    /// Temperature coefficient of this color in ppm/K, if it has one
    pub fn tempco(self) -> Option<u16> {
        match self {
            Self::Brown => Some(100),
            Self::Red => Some(50),
            Self::Orange => Some(15),
            Self::Yellow => Some(25),
            Self::Blue => Some(10),
            Self::Violet => Some(5),
            _ => None,
        }
    }

    /// Reverse digit lookup: the color encoding digit value `d`
    pub fn from_digit(d: u8) -> Option<Self> {
        DIGIT_COLORS.get(d as usize).copied()
    }

    /// Reverse multiplier lookup: the color encoding exponent `exp`
    pub fn from_exponent(exp: i32) -> Option<Self> {
        match exp {
            -2 => Some(Self::Silver),
            -1 => Some(Self::Gold),
            0..=9 => Self::from_digit(exp as u8),
            _ => None,
        }
    }

    /// The tolerance color for a requested tolerance percentage.
    ///
    /// This is a ceiling over fixed thresholds, not a nearest-neighbor
    /// match: each class covers requests up to its percentage, and anything
    /// looser than +/-10% maps to the "no color" +/-20% marker.
    pub fn for_tolerance(percent: f64) -> Self {
        if percent <= 0.1 {
            Self::Violet
        } else if percent <= 0.25 {
            Self::Blue
        } else if percent <= 0.5 {
            Self::Green
        } else if percent <= 1.0 {
            Self::Brown
        } else if percent <= 2.0 {
            Self::Red
        } else if percent <= 5.0 {
            Self::Gold
        } else if percent <= 10.0 {
            Self::Silver
        } else {
            Self::NoColor
        }
    }

    /// Lowercase name of this color
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Grey => "grey",
            Self::White => "white",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::NoColor => "none",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "brown" => Ok(Self::Brown),
            "red" => Ok(Self::Red),
            "orange" => Ok(Self::Orange),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "violet" | "purple" => Ok(Self::Violet),
            "grey" | "gray" => Ok(Self::Grey),
            "white" => Ok(Self::White),
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "none" | "no color" | "nocolor" => Ok(Self::NoColor),
            other => Err(CodeError::parse(format!("unknown color name '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(Color::Black.digit(), Some(0));
        assert_eq!(Color::White.digit(), Some(9));
        assert_eq!(Color::Gold.digit(), None);
        assert_eq!(Color::NoColor.digit(), None);
    }

    #[test]
    fn test_exponent_values() {
        assert_eq!(Color::Silver.exponent(), Some(-2));
        assert_eq!(Color::Gold.exponent(), Some(-1));
        assert_eq!(Color::Black.exponent(), Some(0));
        assert_eq!(Color::White.exponent(), Some(9));
        assert_eq!(Color::NoColor.exponent(), None);
    }

    #[test]
    fn test_role_tables_are_partial() {
        // Orange has a digit and a tempco but no tolerance
        assert_eq!(Color::Orange.digit(), Some(3));
        assert_eq!(Color::Orange.tempco(), Some(15));
        assert_eq!(Color::Orange.tolerance(), None);
        // NoColor only has a tolerance
        assert_eq!(Color::NoColor.tolerance(), Some(20.0));
        assert_eq!(Color::NoColor.tempco(), None);
    }

    #[test]
    fn test_reverse_lookups_invert_forward() {
        for d in 0..10u8 {
            assert_eq!(Color::from_digit(d).unwrap().digit(), Some(d));
        }
        for exp in -2..=9 {
            assert_eq!(Color::from_exponent(exp).unwrap().exponent(), Some(exp));
        }
        assert_eq!(Color::from_digit(10), None);
        assert_eq!(Color::from_exponent(10), None);
        assert_eq!(Color::from_exponent(-3), None);
    }

    #[test]
    fn test_tolerance_color_is_ceiling_not_nearest() {
        assert_eq!(Color::for_tolerance(5.0), Color::Gold);
        // 6% is closer to 5% than to 10%, but the class must not be looser
        // than the request
        assert_eq!(Color::for_tolerance(6.0), Color::Silver);
        assert_eq!(Color::for_tolerance(0.05), Color::Violet);
        assert_eq!(Color::for_tolerance(15.0), Color::NoColor);
    }

    #[test]
    fn test_color_name_parsing() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("Grey".parse::<Color>().unwrap(), Color::Grey);
        assert_eq!("gray".parse::<Color>().unwrap(), Color::Grey);
        assert_eq!("none".parse::<Color>().unwrap(), Color::NoColor);
        assert!("mauve".parse::<Color>().is_err());
    }
}
