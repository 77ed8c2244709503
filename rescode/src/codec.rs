/*!
Band layout, decoder and encoder.

This module maps ordered color sequences to resistance values and back.
Layouts are a pure function of the band count: 4 bands carry two digits,
5 and 6 bands carry three, and only 6-band layouts carry a temperature
coefficient. Digit and multiplier bands are mandatory; tolerance and
tempco bands default or are omitted when absent.
*/

use crate::color::{Color, DIGIT_COLORS};
use crate::error::{CodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role of one band position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    Digit,
    Multiplier,
    Tolerance,
    TempCo,
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Digit => "digit",
            Self::Multiplier => "multiplier",
            Self::Tolerance => "tolerance",
            Self::TempCo => "temperature coefficient",
        };
        f.write_str(name)
    }
}

/// Supported band counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BandCount {
    Four,
    Five,
    Six,
}

impl BandCount {
    /// Ordered role assignment for every band position
    pub fn layout(self) -> &'static [BandRole] {
        use BandRole::*;
        match self {
            Self::Four => &[Digit, Digit, Multiplier, Tolerance],
            Self::Five => &[Digit, Digit, Digit, Multiplier, Tolerance],
            Self::Six => &[Digit, Digit, Digit, Multiplier, Tolerance, TempCo],
        }
    }

    /// Number of bands
    pub fn count(self) -> usize {
        self.layout().len()
    }

    /// Number of significant digits carried by this layout
    pub fn digit_count(self) -> u32 {
        match self {
            Self::Four => 2,
            Self::Five | Self::Six => 3,
        }
    }

    /// Tolerance color assumed when the tolerance band is absent.
    ///
    /// Gold (+/-5%) for 4-band resistors, brown (+/-1%) for 5 and 6 bands,
    /// per convention.
    pub fn default_tolerance_color(self) -> Color {
        match self {
            Self::Four => Color::Gold,
            Self::Five | Self::Six => Color::Brown,
        }
    }
}

impl TryFrom<u8> for BandCount {
    type Error = CodeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(CodeError::InvalidBandCount(other)),
        }
    }
}

impl From<BandCount> for u8 {
    fn from(value: BandCount) -> Self {
        value.count() as u8
    }
}

impl fmt::Display for BandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Result of decoding a color sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoded {
    /// Nominal resistance in ohms
    pub ohms: f64,
    /// Tolerance percentage
    pub tolerance_percent: f64,
    /// Tolerance color, after applying the band-count default if needed
    pub tolerance_color: Color,
    /// Temperature coefficient in ppm/K, only for 6-band sequences with a
    /// tempco band supplied
    pub tempco_ppm: Option<u16>,
    /// Lower bound of the tolerance range in ohms
    pub min_ohms: f64,
    /// Upper bound of the tolerance range in ohms
    pub max_ohms: f64,
}

/// Decode an ordered color sequence into a resistance value.
///
/// `colors` may be shorter than the full layout: trailing optional bands
/// (tolerance, tempco) default or are omitted. A missing or role-invalid
/// color in a digit or multiplier position is an error; a role-invalid
/// color in an optional position falls back to the default instead.
pub fn decode(colors: &[Color], bands: BandCount) -> Result<Decoded> {
    let layout = bands.layout();
    if colors.len() > layout.len() {
        return Err(CodeError::InvalidBandCount(colors.len() as u8));
    }

    let mut significand: u32 = 0;
    let mut exponent: i32 = 0;
    let mut tolerance_color = None;
    let mut tempco_ppm = None;

    for (position, &role) in layout.iter().enumerate() {
        let color = colors.get(position).copied();
        match role {
            BandRole::Digit => {
                let digit = color
                    .and_then(Color::digit)
                    .ok_or(CodeError::InvalidColor { position, role, color })?;
                significand = significand * 10 + u32::from(digit);
            }
            BandRole::Multiplier => {
                exponent = color
                    .and_then(Color::exponent)
                    .ok_or(CodeError::InvalidColor { position, role, color })?;
            }
            BandRole::Tolerance => {
                tolerance_color = color.filter(|c| c.tolerance().is_some());
            }
            BandRole::TempCo => {
                tempco_ppm = color.and_then(Color::tempco);
            }
        }
    }

    let tolerance_color = tolerance_color.unwrap_or_else(|| bands.default_tolerance_color());
    let tolerance_percent = tolerance_color
        .tolerance()
        .unwrap_or_else(|| unreachable!("default tolerance colors always resolve"));

    let ohms = f64::from(significand) * 10f64.powi(exponent);
    let min_ohms = ohms * (1.0 - tolerance_percent / 100.0);
    let max_ohms = ohms * (1.0 + tolerance_percent / 100.0);

    Ok(Decoded {
        ohms,
        tolerance_percent,
        tolerance_color,
        tempco_ppm,
        min_ohms,
        max_ohms,
    })
}

/// Encode a target resistance into an ordered color sequence.
///
/// The resistance is reduced to `digit_count` significant digits with a
/// rollover guard: a mantissa that rounds up to exactly 10 becomes 1.0 at
/// the next decade rather than an error. Exponents outside -2..=9 cannot
/// be represented by any multiplier color and fail; they are never
/// clamped. For 6-band output the tempco position is filled with brown
/// (100 ppm/K), the conventional default.
pub fn encode(ohms: f64, bands: BandCount, tolerance_percent: f64) -> Result<Vec<Color>> {
    if !ohms.is_finite() || ohms <= 0.0 {
        return Err(CodeError::InvalidResistance(ohms));
    }

    let decade = ohms.log10().floor() as i32;
    let mantissa = ohms / 10f64.powi(decade);
    let digit_count = bands.digit_count();

    let mut digits = (mantissa * 10f64.powi(digit_count as i32 - 1)).round() as u32;
    let mut exponent = decade - (digit_count as i32 - 1);

    // Rollover guard: 9.99... rounds up to a full extra digit
    if digits == 10u32.pow(digit_count) {
        digits = 10u32.pow(digit_count - 1);
        exponent += 1;
    }

    let mut colors = Vec::with_capacity(bands.count());
    let mut divisor = 10u32.pow(digit_count - 1);
    while divisor > 0 {
        colors.push(DIGIT_COLORS[(digits / divisor % 10) as usize]);
        divisor /= 10;
    }

    colors.push(
        Color::from_exponent(exponent)
            .ok_or(CodeError::UnrepresentableExponent { exponent })?,
    );
    colors.push(Color::for_tolerance(tolerance_percent));

    if bands == BandCount::Six {
        colors.push(Color::Brown);
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shape() {
        for bands in [BandCount::Four, BandCount::Five, BandCount::Six] {
            let layout = bands.layout();
            assert_eq!(layout.len(), bands.count());
            let multipliers = layout.iter().filter(|r| **r == BandRole::Multiplier).count();
            let tolerances = layout.iter().filter(|r| **r == BandRole::Tolerance).count();
            let tempcos = layout.iter().filter(|r| **r == BandRole::TempCo).count();
            assert_eq!(multipliers, 1);
            assert_eq!(tolerances, 1);
            assert!(tempcos <= 1);
        }
    }

    #[test]
    fn test_band_count_conversion() {
        assert_eq!(BandCount::try_from(4).unwrap(), BandCount::Four);
        assert_eq!(BandCount::try_from(6).unwrap(), BandCount::Six);
        assert!(matches!(
            BandCount::try_from(3),
            Err(CodeError::InvalidBandCount(3))
        ));
    }

    #[test]
    fn test_decode_four_band() {
        let colors = [Color::Brown, Color::Black, Color::Red, Color::Gold];
        let decoded = decode(&colors, BandCount::Four).unwrap();
        assert_eq!(decoded.ohms, 1000.0);
        assert_eq!(decoded.tolerance_percent, 5.0);
        assert_eq!(decoded.tolerance_color, Color::Gold);
        assert_eq!(decoded.tempco_ppm, None);
        assert!((decoded.min_ohms - 950.0).abs() < 1e-9);
        assert!((decoded.max_ohms - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_decode_five_band() {
        // 475 * 10^1 = 4750
        let colors = [
            Color::Yellow,
            Color::Violet,
            Color::Green,
            Color::Brown,
            Color::Red,
        ];
        let decoded = decode(&colors, BandCount::Five).unwrap();
        assert_eq!(decoded.ohms, 4750.0);
        assert_eq!(decoded.tolerance_percent, 2.0);
    }

    #[test]
    fn test_decode_six_band_with_tempco() {
        let colors = [
            Color::Brown,
            Color::Black,
            Color::Black,
            Color::Red,
            Color::Brown,
            Color::Red,
        ];
        let decoded = decode(&colors, BandCount::Six).unwrap();
        assert_eq!(decoded.ohms, 10_000.0);
        assert_eq!(decoded.tolerance_percent, 1.0);
        assert_eq!(decoded.tempco_ppm, Some(50));
    }

    #[test]
    fn test_decode_defaults_missing_tolerance() {
        // 4-band with no tolerance band defaults to gold
        let colors = [Color::Brown, Color::Black, Color::Red];
        let decoded = decode(&colors, BandCount::Four).unwrap();
        assert_eq!(decoded.tolerance_color, Color::Gold);
        assert_eq!(decoded.tolerance_percent, 5.0);

        // 5-band defaults to brown
        let colors = [Color::Brown, Color::Black, Color::Black, Color::Red];
        let decoded = decode(&colors, BandCount::Five).unwrap();
        assert_eq!(decoded.tolerance_color, Color::Brown);
        assert_eq!(decoded.tolerance_percent, 1.0);
    }

    #[test]
    fn test_decode_omits_absent_tempco() {
        let colors = [
            Color::Brown,
            Color::Black,
            Color::Black,
            Color::Red,
            Color::Brown,
        ];
        let decoded = decode(&colors, BandCount::Six).unwrap();
        assert_eq!(decoded.tempco_ppm, None);
    }

    #[test]
    fn test_decode_rejects_invalid_mandatory_color() {
        // Gold has no digit value
        let colors = [Color::Gold, Color::Black, Color::Red, Color::Gold];
        let err = decode(&colors, BandCount::Four).unwrap_err();
        assert_eq!(
            err,
            CodeError::InvalidColor {
                position: 0,
                role: BandRole::Digit,
                color: Some(Color::Gold),
            }
        );

        // NoColor has no multiplier exponent
        let colors = [Color::Brown, Color::Black, Color::NoColor, Color::Gold];
        let err = decode(&colors, BandCount::Four).unwrap_err();
        assert!(matches!(
            err,
            CodeError::InvalidColor {
                position: 2,
                role: BandRole::Multiplier,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_missing_mandatory_band() {
        let colors = [Color::Brown, Color::Black];
        let err = decode(&colors, BandCount::Four).unwrap_err();
        assert_eq!(
            err,
            CodeError::InvalidColor {
                position: 2,
                role: BandRole::Multiplier,
                color: None,
            }
        );
    }

    #[test]
    fn test_decode_zero_is_a_valid_digit() {
        // Black in a digit position is 0, not an error
        let colors = [Color::Black, Color::Black, Color::Black, Color::Gold];
        let decoded = decode(&colors, BandCount::Four).unwrap();
        assert_eq!(decoded.ohms, 0.0);
    }

    #[test]
    fn test_encode_four_band() {
        let colors = encode(4700.0, BandCount::Four, 5.0).unwrap();
        assert_eq!(
            colors,
            vec![Color::Yellow, Color::Violet, Color::Red, Color::Gold]
        );
    }

    #[test]
    fn test_encode_five_band() {
        let colors = encode(4750.0, BandCount::Five, 2.0).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::Yellow,
                Color::Violet,
                Color::Green,
                Color::Brown,
                Color::Red
            ]
        );
    }

    #[test]
    fn test_encode_six_band_fills_tempco() {
        let colors = encode(1000.0, BandCount::Six, 1.0).unwrap();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[5], Color::Brown);
    }

    #[test]
    fn test_encode_fractional_ohms() {
        // 0.47 Ω = 47 * 10^-2, silver multiplier
        let colors = encode(0.47, BandCount::Four, 10.0).unwrap();
        assert_eq!(
            colors,
            vec![Color::Yellow, Color::Violet, Color::Silver, Color::Silver]
        );
    }

    #[test]
    fn test_encode_mantissa_rollover() {
        // 9.96 rounds to 10.0 at 2 significant digits and must roll over
        // into digits 10, exponent 0 rather than an unencodable digit pair
        let colors = encode(9.96, BandCount::Four, 5.0).unwrap();
        assert_eq!(
            colors,
            vec![Color::Brown, Color::Black, Color::Black, Color::Gold]
        );
        let decoded = decode(&colors, BandCount::Four).unwrap();
        assert_eq!(decoded.ohms, 10.0);
    }

    #[test]
    fn test_encode_out_of_range_magnitude() {
        assert!(matches!(
            encode(1e15, BandCount::Four, 5.0),
            Err(CodeError::UnrepresentableExponent { .. })
        ));
        assert!(matches!(
            encode(1e-4, BandCount::Four, 5.0),
            Err(CodeError::UnrepresentableExponent { .. })
        ));
    }

    #[test]
    fn test_encode_rejects_non_positive_input() {
        assert!(matches!(
            encode(0.0, BandCount::Four, 5.0),
            Err(CodeError::InvalidResistance(_))
        ));
        assert!(matches!(
            encode(-100.0, BandCount::Four, 5.0),
            Err(CodeError::InvalidResistance(_))
        ));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let decoded = decode(&encode(4700.0, BandCount::Four, 5.0).unwrap(), BandCount::Four)
            .unwrap();
        assert_eq!(decoded.ohms, 4700.0);
        assert_eq!(decoded.tolerance_percent, 5.0);
    }
}
