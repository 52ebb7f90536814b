//! Core domain types for the Night Owl engine.
//!
//! The engine enriches place records fetched from an external
//! places-search API with late-night classifications, ranking scores,
//! and display-ready hours summaries. This crate holds the data model
//! and the pure building blocks: the category taxonomy, the tolerant
//! hours representation, the haversine distance calculator, and the
//! traits that abstract the API transport and the result cache.
//!
//! Derivation logic (classification, scoring, assembly) lives in
//! `nightowl-scorer`.

#![forbid(unsafe_code)]

pub mod cache;
pub mod category;
pub mod distance;
pub mod enriched;
pub mod hours;
pub mod place;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cache::{CacheKey, MemoryCache, SearchCache};
pub use category::{Category, CategoryMap};
pub use distance::{InvalidCoordinates, distance_miles};
pub use enriched::{EnrichedBusiness, HoursStatus, LateNightLevel, RideEstimate, TodaysHours};
pub use hours::{DaySchedule, HoursData, OpenInterval, RawTime, format_hhmm};
pub use place::{Location, Place};
pub use source::{PlaceSource, SearchQuery, SourceError};
