/*!
IEC 60063 preferred-value series generation.

Base values are generated from the geometric formula `10^(i/N)` rounded to
the series' significant-digit precision, rather than copied from printed
tables. Rounding can collapse neighboring steps (E6 keeps only 5 distinct
values at 1 significant digit), so callers must not assume a series yields
exactly N values per decade.
*/

use crate::error::CodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Absolute difference below which two generated base values are
/// considered the same step
pub const DEDUP_EPSILON: f64 = 1e-6;

/// The six standard E-series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ESeries {
    E6,
    E12,
    E24,
    E48,
    E96,
    E192,
}

impl ESeries {
    /// All series, smallest step count first
    pub const ALL: [ESeries; 6] = [
        Self::E6,
        Self::E12,
        Self::E24,
        Self::E48,
        Self::E96,
        Self::E192,
    ];

    /// Number of steps per decade
    pub fn steps(self) -> u32 {
        match self {
            Self::E6 => 6,
            Self::E12 => 12,
            Self::E24 => 24,
            Self::E48 => 48,
            Self::E96 => 96,
            Self::E192 => 192,
        }
    }

    /// Default tolerance percentage associated with this series
    pub fn default_tolerance(self) -> f64 {
        match self {
            Self::E6 => 20.0,
            Self::E12 => 10.0,
            Self::E24 => 5.0,
            Self::E48 => 2.0,
            Self::E96 => 1.0,
            Self::E192 => 0.5,
        }
    }

    /// Recommended band count for values from this series
    pub fn recommended_bands(self) -> crate::codec::BandCount {
        use crate::codec::BandCount;
        match self {
            Self::E6 | Self::E12 | Self::E24 => BandCount::Four,
            Self::E48 | Self::E96 | Self::E192 => BandCount::Five,
        }
    }

    /// Series name, e.g. "E24"
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E6 => "E6",
            Self::E12 => "E12",
            Self::E24 => "E24",
            Self::E48 => "E48",
            Self::E96 => "E96",
            Self::E192 => "E192",
        }
    }

    /// Generate the ordered base values of this series, all in [1, 10)
    pub fn base_values(self) -> Vec<f64> {
        base_values(self.steps())
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ESeries {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "E6" => Ok(Self::E6),
            "E12" => Ok(Self::E12),
            "E24" => Ok(Self::E24),
            "E48" => Ok(Self::E48),
            "E96" => Ok(Self::E96),
            "E192" => Ok(Self::E192),
            other => Err(CodeError::parse(format!("unknown series '{other}'"))),
        }
    }
}

/// Round `x` to `sig` significant decimal digits
pub fn round_sig(x: f64, sig: u32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let scale = 10f64.powi(sig as i32 - x.abs().log10().ceil() as i32);
    (x * scale).round() / scale
}

/// Generate the ordered base values for a series of `n` steps per decade.
///
/// Values are `round_sig(10^(i/n), sig)` with 1 significant digit for
/// n <= 6, 2 for n <= 48 and 3 above that. Values pushed outside [1, 10)
/// by rounding are dropped, and near-duplicates (within [`DEDUP_EPSILON`])
/// are removed preserving first-seen order.
pub fn base_values(n: u32) -> Vec<f64> {
    let sig = if n <= 6 {
        1
    } else if n <= 48 {
        2
    } else {
        3
    };

    let mut values: Vec<f64> = Vec::with_capacity(n as usize);
    for i in 0..n {
        let v = round_sig(10f64.powf(i as f64 / n as f64), sig);
        if !(1.0..10.0).contains(&v) {
            continue;
        }
        if values.iter().any(|&u| (u - v).abs() < DEDUP_EPSILON) {
            continue;
        }
        values.push(v);
    }

    values
}
