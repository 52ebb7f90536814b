//! Input records as delivered by the external places-search API.
//!
//! Coordinates are WGS84. The upstream feed is lenient: coordinates,
//! hours, and ratings may all be absent, so the model keeps them
//! optional and lets the pipeline decide how to degrade.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hours::HoursData;

/// Geographic position and postal fields for a place.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Latitude in degrees, when the feed supplies one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees, when the feed supplies one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lng: Option<f64>,
    /// Street address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: Option<String>,
    /// City or town.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locality: Option<String>,
    /// State or region.
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
}

impl Location {
    /// Return the coordinate when both components are present and finite.
    ///
    /// `x` is longitude and `y` is latitude, matching `geo` conventions.
    #[must_use]
    pub fn coord(&self) -> Option<Coord<f64>> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coord { x: lng, y: lat })
            }
            _ => None,
        }
    }

    /// Join the present address parts with commas.
    ///
    /// # Examples
    /// ```
    /// use nightowl_core::Location;
    ///
    /// let location = Location {
    ///     address: Some("142 Main St".into()),
    ///     locality: Some("Oakland".into()),
    ///     region: Some("CA".into()),
    ///     ..Location::default()
    /// };
    /// assert_eq!(location.formatted_address(), "142 Main St, Oakland, CA");
    /// assert_eq!(
    ///     Location::default().formatted_address(),
    ///     "Address not available",
    /// );
    /// ```
    #[must_use]
    pub fn formatted_address(&self) -> String {
        let parts: Vec<&str> = [&self.address, &self.locality, &self.region]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        if parts.is_empty() {
            "Address not available".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// A place record returned by the external search API.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Place {
    /// Opaque upstream identifier, unique per place.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position and postal fields.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Location,
    /// External category codes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category_ids: Vec<String>,
    /// Operating hours, when the feed knows them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hours: Option<HoursData>,
    /// Rating on the upstream 0-10 scale.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    /// Contact number passthrough, unused in scoring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tel: Option<String>,
    /// Website passthrough, unused in scoring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub website: Option<String>,
}

impl Place {
    /// Construct a minimal record with a name and position.
    ///
    /// Remaining fields start empty; builder-style setters on the struct
    /// fields cover the rest.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Location {
                lat: Some(lat),
                lng: Some(lng),
                ..Location::default()
            },
            category_ids: Vec::new(),
            hours: None,
            rating: None,
            tel: None,
            website: None,
        }
    }
}
