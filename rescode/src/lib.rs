/*!
# Resistor Color-Code Library

This crate contains the core logic for a resistor color-code calculator:
the bidirectional codec between band colors and resistance values, the
IEC 60063 E-series generator and the standard-value catalog built from it.

## Core Types

- [`Color`] - band colors with their digit/multiplier/tolerance/tempco roles
- [`BandCount`] - supported band counts and their layouts
- [`ESeries`] - the six standard series (E6 through E192)
- [`Catalog`] - standard nominal values expanded across decades
- [`Decoded`] - the result of decoding a color sequence

## Modules

- [`color`] - band color tables
- [`codec`] - band layouts, decoder and encoder
- [`series`] - E-series base-value generation
- [`catalog`] - catalog construction and query
- [`format`] - ohm value formatting and parsing
- [`error`] - common error types

Everything here is a pure, synchronous computation over in-memory data:
no I/O, no global state. Callers own the catalog they build and the
values they decode.
*/

pub mod catalog;
pub mod codec;
pub mod color;
pub mod error;
pub mod format;
pub mod series;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, CatalogQuery, SortOrder};
pub use codec::{decode, encode, BandCount, BandRole, Decoded};
pub use color::Color;
pub use error::{CodeError, Result};
pub use format::{format_ohms, parse_ohms};
pub use series::ESeries;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    /// Every catalog entry must survive an encode/decode round trip at its
    /// recommended band count: the decoded value equals the nominal value
    /// reduced to the layout's significant-digit precision.
    ///
    /// The one legitimate exception: a 3-digit layout cannot express values
    /// below 1 Ω (the third significant digit would need exponent -3), so
    /// sub-ohm entries from the 5-band series must fail with the
    /// unrepresentable-exponent error instead of being silently clamped.
    #[test]
    fn test_catalog_round_trip() {
        let catalog = Catalog::build(0.1, 1e8);
        for entry in catalog.entries() {
            let encoded = encode(entry.ohms, entry.band_count, entry.tolerance_percent);
            if entry.ohms < 1.0 && entry.band_count.digit_count() == 3 {
                assert!(
                    matches!(encoded, Err(CodeError::UnrepresentableExponent { .. })),
                    "{}: expected unrepresentable exponent, got {encoded:?}",
                    entry.label
                );
                continue;
            }
            let colors =
                encoded.unwrap_or_else(|e| panic!("encode failed for {}: {e}", entry.label));
            let decoded = decode(&colors, entry.band_count)
                .unwrap_or_else(|e| panic!("decode failed for {}: {e}", entry.label));

            let expected = series::round_sig(entry.ohms, entry.band_count.digit_count());
            let rel = (decoded.ohms - expected).abs() / expected;
            assert!(
                rel < 1e-9,
                "{}: expected {expected}, decoded {}",
                entry.label,
                decoded.ohms
            );
            assert_eq!(decoded.tolerance_color, Color::for_tolerance(entry.tolerance_percent));
        }
    }
}
