/*!
Human-readable resistance formatting and parsing.

Formatting picks the largest unit (GΩ/MΩ/kΩ/Ω) that keeps the scaled value
at or above 1, prints up to three decimal places and trims trailing zeros.
Parsing accepts plain numbers, unit-suffixed shorthand and the R-notation
used on schematics (`4r7` for 4.7 Ω).
*/

use crate::error::{CodeError, Result};
use regex::Regex;

/// Format a resistance in ohms as a magnitude string, e.g. "4.7 kΩ"
pub fn format_ohms(ohms: f64) -> String {
    let (factor, unit) = if ohms >= 1e9 {
        (1e9, "GΩ")
    } else if ohms >= 1e6 {
        (1e6, "MΩ")
    } else if ohms >= 1e3 {
        (1e3, "kΩ")
    } else {
        (1.0, "Ω")
    };

    let mut scaled = format!("{:.3}", ohms / factor);
    while scaled.ends_with('0') {
        scaled.pop();
    }
    if scaled.ends_with('.') {
        scaled.pop();
    }

    format!("{scaled} {unit}")
}

/// Parse a resistance string into ohms.
///
/// Accepted forms (case-insensitive, comma allowed as decimal separator):
/// plain numbers ("330", "0.47"), unit suffixes ("47k", "1m", "2g" — note
/// that `m` means mega here, matching the shorthand this tool has always
/// used), explicit ohm suffixes ("330 Ω", "330 ohm"), and R-notation
/// ("4r7" → 4.7, "1r" → 1).
pub fn parse_ohms(text: &str) -> Result<f64> {
    let text = text.trim().to_lowercase().replace(',', ".");
    if text.is_empty() {
        return Err(CodeError::parse("empty resistance text"));
    }

    let r_notation = Regex::new(r"^(\d*\.?\d+)\s*r\s*(\d+)?$").unwrap();
    if let Some(caps) = r_notation.captures(&text) {
        let whole: f64 = caps[1]
            .parse()
            .map_err(|_| CodeError::parse(format!("bad number in '{text}'")))?;
        let frac = match caps.get(2) {
            Some(m) => format!("0.{}", m.as_str())
                .parse::<f64>()
                .map_err(|_| CodeError::parse(format!("bad fraction in '{text}'")))?,
            None => 0.0,
        };
        return Ok(whole + frac);
    }

    let suffixed = Regex::new(r"^(\d*\.?\d+)\s*(g|m|k|ω|ohm|ohms)?$").unwrap();
    if let Some(caps) = suffixed.captures(&text) {
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| CodeError::parse(format!("bad number in '{text}'")))?;
        let factor = match caps.get(2).map(|m| m.as_str()) {
            Some("g") => 1e9,
            Some("m") => 1e6,
            Some("k") => 1e3,
            _ => 1.0,
        };
        return Ok(value * factor);
    }

    text.parse::<f64>()
        .map_err(|_| CodeError::parse(format!("cannot interpret '{text}' as a resistance")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        assert_eq!(format_ohms(330.0), "330 Ω");
        assert_eq!(format_ohms(4700.0), "4.7 kΩ");
        assert_eq!(format_ohms(1_000_000.0), "1 MΩ");
        assert_eq!(format_ohms(2_200_000_000.0), "2.2 GΩ");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_ohms(0.47), "0.47 Ω");
        assert_eq!(format_ohms(1500.0), "1.5 kΩ");
        assert_eq!(format_ohms(10_000.0), "10 kΩ");
    }

    #[test]
    fn test_format_rounds_to_three_decimals() {
        assert_eq!(format_ohms(1_234_567.0), "1.235 MΩ");
    }

    #[test]
    fn test_parse_unit_suffixes() {
        assert_eq!(parse_ohms("47k").unwrap(), 47_000.0);
        assert_eq!(parse_ohms("1m").unwrap(), 1_000_000.0);
        assert_eq!(parse_ohms("2g").unwrap(), 2e9);
        assert_eq!(parse_ohms("330").unwrap(), 330.0);
        assert_eq!(parse_ohms("330 Ω").unwrap(), 330.0);
        assert_eq!(parse_ohms("330 ohms").unwrap(), 330.0);
    }

    #[test]
    fn test_parse_r_notation() {
        assert_eq!(parse_ohms("4r7").unwrap(), 4.7);
        assert_eq!(parse_ohms("1r").unwrap(), 1.0);
        assert_eq!(parse_ohms("0r22").unwrap(), 0.22);
    }

    #[test]
    fn test_parse_comma_decimal_separator() {
        assert_eq!(parse_ohms("4,7k").unwrap(), 4700.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_ohms("").is_err());
        assert!(parse_ohms("resistor").is_err());
        // interleaved unit notation is deliberately unsupported
        assert!(parse_ohms("4k7").is_err());
    }
}
