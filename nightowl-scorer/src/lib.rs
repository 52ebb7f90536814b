//! Late-night derivations for place records.
//!
//! Everything here is synchronous, pure, and single-threaded: each
//! function takes a fetched [`Place`](nightowl_core::Place) (or just
//! its hours payload) and produces a classification, score, or display
//! string. The [`SearchPipeline`] ties them together: fetch per
//! category through a [`PlaceSource`](nightowl_core::PlaceSource),
//! enrich and filter each record, and sort the combined list by
//! ranking score then distance.
//!
//! Per-record problems (bad coordinates, malformed hours) degrade the
//! record or drop it; they never abort a search. Only a search where
//! every category request fails surfaces as an error.

#![forbid(unsafe_code)]

pub mod hours;
pub mod late_night;
pub mod pipeline;
pub mod safety;
pub mod score;

pub use hours::todays_hours;
pub use late_night::{LateNightAnalysis, classify_level, is_open_late};
pub use pipeline::{RideEstimateConfig, SearchError, SearchPipeline};
pub use safety::{FeatureTables, safety_rating};
pub use score::{ScoreTables, late_night_score};

/// Substring match against a token list; callers lower-case the
/// haystack first.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
