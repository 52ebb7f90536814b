//! Great-circle distance between the query point and a place.
//!
//! Distances drive both the radius filter and the secondary sort key,
//! so invalid inputs surface as an error the caller can use to skip a
//! record rather than rank it with a junk number.

use geo::{Coord, Distance, HaversineMeasure, Point};
use thiserror::Error;

/// Mean Earth radius in miles, so distances come out in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Inputs to the distance calculation were unusable.
///
/// Policy is to skip the affected record, never to abort the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinates are missing or not finite")]
pub struct InvalidCoordinates;

/// Haversine distance in miles between two WGS84 coordinates.
///
/// Pure and symmetric in its arguments; identical points yield zero.
///
/// # Errors
/// Returns [`InvalidCoordinates`] when any component is non-finite or
/// the computed distance is not a non-negative real number.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nightowl_core::distance_miles;
///
/// let sf = Coord { x: -122.4194, y: 37.7749 };
/// let la = Coord { x: -118.2437, y: 34.0522 };
/// let miles = distance_miles(sf, la)?;
/// assert!((miles - 347.0).abs() < 5.0);
/// # Ok::<(), nightowl_core::InvalidCoordinates>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "geodesic distance is inherently floating point"
)]
pub fn distance_miles(origin: Coord<f64>, point: Coord<f64>) -> Result<f64, InvalidCoordinates> {
    let components = [origin.x, origin.y, point.x, point.y];
    if !components.iter().all(|value| value.is_finite()) {
        return Err(InvalidCoordinates);
    }
    let measure = HaversineMeasure::new(EARTH_RADIUS_MILES);
    let miles = measure.distance(Point::from(origin), Point::from(point));
    if miles.is_finite() && miles >= 0.0 {
        Ok(miles)
    } else {
        Err(InvalidCoordinates)
    }
}
