//! Boundary trait for the external places-search API.
//!
//! The engine never talks to the network itself. Implementations wrap
//! whatever transport the deployment uses (live HTTP, recorded
//! snapshots, test fixtures) and hand back batches of [`Place`]
//! records per category.

use geo::Coord;
use thiserror::Error;

use crate::{Category, Place};

/// Parameters of a search request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    /// Centre of the search, WGS84 (`x` = longitude, `y` = latitude).
    pub origin: Coord<f64>,
    /// Search radius in miles.
    pub radius_miles: f64,
}

/// Errors raised while fetching places for one category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The upstream request failed (network, HTTP status, quota).
    #[error("places request failed: {reason}")]
    Request {
        /// Failure description from the transport.
        reason: String,
    },
    /// The upstream response could not be decoded into place records.
    #[error("places payload could not be decoded: {reason}")]
    Payload {
        /// Decoding failure description.
        reason: String,
    },
}

/// Fetch candidate places for one category around a query point.
///
/// A failed category contributes zero records; the pipeline never
/// aborts a whole search over a single category's error. Category
/// fetches carry no ordering requirement among themselves, so callers
/// may fan them out concurrently; implementations must be
/// `Send + Sync`.
pub trait PlaceSource: Send + Sync {
    /// Return places matching `category` near `query.origin`.
    ///
    /// Implementations should over-fetch rather than filter precisely;
    /// the pipeline re-checks every record against the radius.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the upstream request fails or its
    /// payload cannot be decoded.
    fn search(&self, query: &SearchQuery, category: Category)
    -> Result<Vec<Place>, SourceError>;
}
