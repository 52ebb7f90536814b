//! Facade crate for the nightowl late-night search engine.
//!
//! This crate re-exports the core domain types and the enrichment
//! pipeline so applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use nightowl_core::{
    CacheKey, Category, CategoryMap, DaySchedule, EnrichedBusiness, HoursData, HoursStatus,
    InvalidCoordinates, LateNightLevel, Location, MemoryCache, OpenInterval, Place, PlaceSource,
    RawTime, RideEstimate, SearchCache, SearchQuery, SourceError, TodaysHours, distance_miles,
};

pub use nightowl_scorer::{
    FeatureTables, LateNightAnalysis, RideEstimateConfig, ScoreTables, SearchError,
    SearchPipeline, classify_level, is_open_late, late_night_score, safety_rating, todays_hours,
};
