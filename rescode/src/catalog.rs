/*!
Nominal resistance catalog.

The catalog expands every E-series across decades into a flat list of
nominal values bounded by a min/max ohm range. The same nominal value can
appear once per series that contains it; entries are deliberately not
deduplicated across series so a consumer can pick the tightest-tolerance
variant or list all of them. Construction order (series, then decade, then
base value) is preserved; queries return sorted copies and never mutate
the catalog.
*/

use crate::codec::BandCount;
use crate::format::format_ohms;
use crate::series::{round_sig, ESeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decade exponent range expanded for every series
pub const DECADES: std::ops::RangeInclusive<i32> = -1..=7;

/// Slack applied to the min/max range check to tolerate floating rounding
pub const RANGE_EPSILON: f64 = 1e-9;

/// Significant digits kept when normalizing a nominal value
pub const OHMS_PRECISION: u32 = 8;

/// One nominal resistance from a standard series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Nominal resistance in ohms
    pub ohms: f64,
    /// Series this entry belongs to
    pub series: ESeries,
    /// Tolerance percentage of the series
    pub tolerance_percent: f64,
    /// Recommended band count for this value
    pub band_count: BandCount,
    /// Display label, e.g. "2.2 kΩ ±5% (E24)"
    pub label: String,
}

/// Sort order for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filter/sort/search parameters for [`Catalog::query`]
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Keep only entries from this series
    pub series: Option<ESeries>,
    /// Sort direction by nominal ohms
    pub order: SortOrder,
    /// Free-text match against the formatted ohms string
    pub query: Option<String>,
}

/// The full set of nominal values within a configured ohm range
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the catalog for an inclusive `[min_ohms, max_ohms]` range.
    ///
    /// Every series is expanded across the decade exponents in [`DECADES`];
    /// values are normalized to [`OHMS_PRECISION`] significant digits to
    /// suppress floating noise before the label is built.
    pub fn build(min_ohms: f64, max_ohms: f64) -> Self {
        let mut entries = Vec::new();

        for series in ESeries::ALL {
            let tolerance = series.default_tolerance();
            let bands = series.recommended_bands();
            for decade in DECADES {
                let scale = 10f64.powi(decade);
                for base in series.base_values() {
                    let ohms = base * scale;
                    if ohms < min_ohms - RANGE_EPSILON || ohms > max_ohms + RANGE_EPSILON {
                        continue;
                    }
                    let ohms = round_sig(ohms, OHMS_PRECISION);
                    let label = format!("{} ±{}% ({})", format_ohms(ohms), tolerance, series);
                    entries.push(CatalogEntry {
                        ohms,
                        series,
                        tolerance_percent: tolerance,
                        band_count: bands,
                        label,
                    });
                }
            }
        }

        debug!(
            entries = entries.len(),
            min_ohms, max_ohms, "built resistance catalog"
        );

        Self { entries }
    }

    /// Entries in construction order (grouped by series)
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ascending ohms, then ascending tolerance
    pub fn sorted_entries(&self) -> Vec<CatalogEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            a.ohms
                .total_cmp(&b.ohms)
                .then(a.tolerance_percent.total_cmp(&b.tolerance_percent))
        });
        entries
    }

    /// Filter, search and sort the catalog into a fresh list.
    ///
    /// The free-text query has ohm-unit tokens ("Ω", "ohm", "ohms")
    /// stripped, is lowercased, and is then substring-matched against each
    /// entry's formatted ohms string. An empty result is not an error.
    pub fn query(&self, params: &CatalogQuery) -> Vec<CatalogEntry> {
        let needle = params.query.as_deref().map(strip_unit_tokens);

        let mut matches: Vec<CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| params.series.map_or(true, |s| e.series == s))
            .filter(|e| match needle.as_deref() {
                Some(q) if !q.is_empty() => {
                    format_ohms(e.ohms).to_lowercase().contains(q)
                }
                _ => true,
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| match params.order {
            SortOrder::Ascending => a.ohms.total_cmp(&b.ohms),
            SortOrder::Descending => b.ohms.total_cmp(&a.ohms),
        });

        matches
    }
}

/// Remove ohm-unit tokens from a search query and lowercase it
fn strip_unit_tokens(query: &str) -> String {
    let mut q = query.to_lowercase();
    // "Ω" lowercases to "ω" above, so only the small omega remains
    for token in ["ohms", "ohm", "ω"] {
        q = q.replace(token, "");
    }
    q.trim().to_string()
}
