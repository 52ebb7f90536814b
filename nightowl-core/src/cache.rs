//! Caller-owned caching of search results.
//!
//! The cache is an explicit collaborator passed into the pipeline,
//! keyed by a rounded query fingerprint with a fixed expiry window.
//! Last-write-wins semantics are sufficient; correctness never depends
//! on the cache, and omitting it entirely is safe.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::EnrichedBusiness;

/// Fingerprint of a search query.
///
/// Coordinates are rounded to three decimal places (roughly a city
/// block) and the radius to tenths of a mile, so adjacent queries share
/// an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    lat_thousandths: i64,
    lng_thousandths: i64,
    radius_tenths: i64,
}

impl CacheKey {
    /// Build a key from raw query parameters.
    ///
    /// # Examples
    /// ```
    /// use nightowl_core::CacheKey;
    ///
    /// assert_eq!(
    ///     CacheKey::new(37.77491, -122.41942, 5.0),
    ///     CacheKey::new(37.77490, -122.41941, 5.0),
    /// );
    /// ```
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        reason = "rounding onto a fixed grid for cache identity"
    )]
    #[must_use]
    pub fn new(lat: f64, lng: f64, radius_miles: f64) -> Self {
        Self {
            lat_thousandths: (lat * 1000.0).round() as i64,
            lng_thousandths: (lng * 1000.0).round() as i64,
            radius_tenths: (radius_miles * 10.0).round() as i64,
        }
    }
}

/// Last-write-wins storage of search results with staleness checked on
/// read.
pub trait SearchCache {
    /// Return unexpired results for `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<Vec<EnrichedBusiness>>;

    /// Store `results` under `key`, replacing any older entry.
    fn put(&mut self, key: CacheKey, results: Vec<EnrichedBusiness>);
}

/// In-memory [`SearchCache`] with a fixed time-to-live.
#[derive(Debug)]
pub struct MemoryCache {
    ttl: Duration,
    entries: HashMap<CacheKey, (Instant, Vec<EnrichedBusiness>)>,
}

impl MemoryCache {
    /// Default expiry window.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

    /// Cache with the default ten-minute expiry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    /// Cache with a custom expiry window.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<EnrichedBusiness>> {
        self.entries
            .get(key)
            .filter(|(stored, _)| stored.elapsed() < self.ttl)
            .map(|(_, results)| results.clone())
    }

    fn put(&mut self, key: CacheKey, results: Vec<EnrichedBusiness>) {
        self.entries.insert(key, (Instant::now(), results));
    }
}
