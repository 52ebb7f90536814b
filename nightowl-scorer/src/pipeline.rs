//! The search pipeline: fetch per category, enrich and filter each
//! record, sort the combined list.
//!
//! Fan-out across categories carries no ordering requirement; a failed
//! category contributes zero records and the search continues. Only a
//! run in which every category request fails surfaces as an error;
//! an empty result set after filtering is a valid terminal state.

use log::{debug, warn};
use thiserror::Error;

use nightowl_core::{
    CacheKey, Category, CategoryMap, EnrichedBusiness, LateNightLevel, Place, PlaceSource,
    RideEstimate, SearchCache, SearchQuery, distance_miles,
};

use crate::{
    FeatureTables, ScoreTables, classify_level, is_open_late, late_night_score, safety_rating,
    todays_hours,
};

/// Coefficients for the distance-derived ride-share estimate.
///
/// Presentation detail: only the monotonic-in-distance shape matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideEstimateConfig {
    /// Minutes of riding per mile travelled.
    pub minutes_per_mile: f64,
    /// Metered dollars per mile.
    pub dollars_per_mile: f64,
    /// Flag-fall added to every fare.
    pub base_fare: f64,
}

impl Default for RideEstimateConfig {
    fn default() -> Self {
        Self {
            minutes_per_mile: 3.0,
            dollars_per_mile: 2.5,
            base_fare: 8.0,
        }
    }
}

impl RideEstimateConfig {
    /// Estimate a ride from a distance in miles.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "ceiling to whole-unit presentation estimates"
    )]
    #[must_use]
    pub fn estimate(&self, distance: f64) -> RideEstimate {
        RideEstimate {
            minutes: (distance * self.minutes_per_mile).ceil().max(0.0) as u32,
            dollars: (distance * self.dollars_per_mile + self.base_fare).ceil().max(0.0) as u32,
        }
    }
}

/// Errors from a whole search run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every requested category fetch failed; nothing was searched.
    #[error("all {failed} category requests failed")]
    AllCategoriesFailed {
        /// Number of failed category requests.
        failed: usize,
    },
    /// The request named no categories.
    #[error("no categories requested")]
    NoCategories,
}

/// The enrichment pipeline applied to fetched place records.
///
/// Owns the configuration tables; stateless across runs. All logic is
/// synchronous and pure; the only blocking work happens inside the
/// caller's [`PlaceSource`].
#[derive(Debug, Clone, Default)]
pub struct SearchPipeline {
    /// External-id to category translation, consulted per record.
    pub categories: CategoryMap,
    /// Ranking tables (category bases, chain list).
    pub scores: ScoreTables,
    /// Feature tag tables.
    pub features: FeatureTables,
    /// Ride estimate coefficients.
    pub ride: RideEstimateConfig,
}

impl SearchPipeline {
    /// Pipeline with the default tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrich a single fetched place.
    ///
    /// Returns `None` when the record is excluded: missing or invalid
    /// coordinates, beyond the requested radius, or no late-night
    /// evidence per the inclusion predicate.
    #[must_use]
    pub fn enrich(
        &self,
        place: &Place,
        category: Category,
        query: &SearchQuery,
        today: u8,
    ) -> Option<EnrichedBusiness> {
        let Some(coord) = place.location.coord() else {
            debug!("skipping {}: missing coordinates", place.id);
            return None;
        };
        let distance = match distance_miles(query.origin, coord) {
            Ok(distance) => distance,
            Err(err) => {
                debug!("skipping {}: {err}", place.id);
                return None;
            }
        };
        if distance > query.radius_miles {
            return None;
        }

        let is_late = is_open_late(place.hours.as_ref());
        let analysis = classify_level(place.hours.as_ref());
        if !self.should_include(place, category, is_late, analysis.level) {
            debug!("excluding {}: no late-night evidence", place.name);
            return None;
        }

        let score = late_night_score(place, category, is_late, &analysis, &self.scores);
        Some(EnrichedBusiness {
            id: place.id.clone(),
            name: place.name.clone(),
            address: place.location.formatted_address(),
            category,
            distance_miles: distance,
            rating_out_of_five: place.rating.map(normalise_rating),
            is_late_night: is_late,
            late_night_level: analysis.level,
            late_night_score: score,
            safety_rating: safety_rating(place, category, &self.scores),
            features: self.features.features(category),
            todays_hours: todays_hours(place.hours.as_ref(), today),
            ride: self.ride.estimate(distance),
            tel: place.tel.clone(),
            website: place.website.clone(),
        })
    }

    /// The inclusion predicate: any single piece of late-night evidence
    /// keeps the record.
    fn should_include(
        &self,
        place: &Place,
        category: Category,
        is_late: bool,
        level: LateNightLevel,
    ) -> bool {
        if is_late || matches!(category, Category::Gas | Category::Pharmacy) {
            return true;
        }
        if level != LateNightLevel::CheckHours {
            return true;
        }
        let name = place.name.to_lowercase();
        name.contains("24") || name.contains("hour") || self.scores.matches_chain(&place.name)
    }

    /// Run a full search across `categories`.
    ///
    /// Results are ordered by ranking score descending, then distance
    /// ascending. Per-category failures are logged and tolerated; zero
    /// matches with at least one successful fetch is an `Ok` empty
    /// list.
    ///
    /// # Errors
    /// [`SearchError::AllCategoriesFailed`] when every request failed,
    /// [`SearchError::NoCategories`] for an empty category list.
    pub fn run(
        &self,
        source: &dyn PlaceSource,
        query: &SearchQuery,
        today: u8,
        categories: &[Category],
    ) -> Result<Vec<EnrichedBusiness>, SearchError> {
        if categories.is_empty() {
            return Err(SearchError::NoCategories);
        }
        let mut results = Vec::new();
        let mut failures = 0_usize;
        for &category in categories {
            match source.search(query, category) {
                Ok(places) => {
                    debug!("{category}: {} candidate places", places.len());
                    results.extend(places.iter().filter_map(|place| {
                        // A record's own category codes win over the
                        // category it was fetched under.
                        let resolved = self
                            .categories
                            .resolve(&place.category_ids)
                            .unwrap_or(category);
                        self.enrich(place, resolved, query, today)
                    }));
                }
                Err(err) => {
                    warn!("{category}: request failed, continuing without it: {err}");
                    failures += 1;
                }
            }
        }
        if failures == categories.len() {
            return Err(SearchError::AllCategoriesFailed { failed: failures });
        }
        sort_results(&mut results);
        Ok(results)
    }

    /// Run a search with a caller-owned cache consulted first.
    ///
    /// Fresh results are stored under the query's rounded
    /// [`CacheKey`]; an unexpired entry short-circuits the fetch
    /// entirely.
    ///
    /// # Errors
    /// Propagates [`SearchError`] from [`Self::run`] on a cache miss.
    pub fn run_cached(
        &self,
        cache: &mut dyn SearchCache,
        source: &dyn PlaceSource,
        query: &SearchQuery,
        today: u8,
        categories: &[Category],
    ) -> Result<Vec<EnrichedBusiness>, SearchError> {
        let key = CacheKey::new(query.origin.y, query.origin.x, query.radius_miles);
        if let Some(hit) = cache.get(&key) {
            debug!("returning {} cached results", hit.len());
            return Ok(hit);
        }
        let results = self.run(source, query, today, categories)?;
        cache.put(key, results.clone());
        Ok(results)
    }
}

/// Order by ranking score descending, then distance ascending.
fn sort_results(results: &mut [EnrichedBusiness]) {
    results.sort_by(|a, b| {
        b.late_night_score
            .cmp(&a.late_night_score)
            .then_with(|| a.distance_miles.total_cmp(&b.distance_miles))
    });
}

/// Convert the upstream 0-10 rating to a 0-5 display scale, one
/// decimal place.
#[expect(clippy::float_arithmetic, reason = "display scale conversion")]
fn normalise_rating(rating: f64) -> f64 {
    (rating / 2.0 * 10.0).round() / 10.0
}
