//! Enriched output records handed to the presentation layer.
//!
//! Records are assembled fresh on every search, never mutated in place,
//! and replaced wholesale by the next search. The only identity they
//! carry is the upstream place id.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Category;

/// How strongly a place's hours signal late-night availability.
///
/// Ordered from strongest evidence (`TwentyFourSeven`) to none
/// (`CheckHours`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LateNightLevel {
    /// Open around the clock.
    #[cfg_attr(feature = "serde", serde(rename = "24/7"))]
    TwentyFourSeven,
    /// Open until 3 AM or later.
    #[cfg_attr(feature = "serde", serde(rename = "Open Very Late"))]
    OpenVeryLate,
    /// Open until roughly 1-2 AM.
    #[cfg_attr(feature = "serde", serde(rename = "Open Late"))]
    OpenLate,
    /// No evidence either way.
    #[cfg_attr(feature = "serde", serde(rename = "Check Hours"))]
    CheckHours,
}

impl LateNightLevel {
    /// Return the level's display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwentyFourSeven => "24/7",
            Self::OpenVeryLate => "Open Very Late",
            Self::OpenLate => "Open Late",
            Self::CheckHours => "Check Hours",
        }
    }
}

impl std::fmt::Display for LateNightLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a place's schedule for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HoursStatus {
    /// No hours data at all.
    Unknown,
    /// Open around the clock.
    #[cfg_attr(feature = "serde", serde(rename = "24/7"))]
    TwentyFourSeven,
    /// Closes in the small hours of the morning.
    Late,
    /// Upstream display text passed through verbatim.
    Display,
    /// No open interval today.
    Closed,
    /// Today's interval closes on the following calendar day.
    Overnight,
    /// Ordinary daytime interval.
    Regular,
}

/// A place's schedule for the current day, in human terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TodaysHours {
    /// Coarse open/closed/overnight classification.
    pub status: HoursStatus,
    /// Human-readable summary for display.
    pub display: String,
    /// Whether the place should be treated as reachable today.
    ///
    /// Deliberately `true` for malformed hours: a data quality issue
    /// must not hide a business from results.
    pub is_open: bool,
}

impl TodaysHours {
    /// The record used when no hours data exists.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            status: HoursStatus::Unknown,
            display: "Hours unknown".to_owned(),
            is_open: false,
        }
    }
}

/// Ride-share estimate derived purely from distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RideEstimate {
    /// Estimated ride duration in minutes.
    pub minutes: u32,
    /// Estimated fare in whole dollars.
    pub dollars: u32,
}

/// A place record enriched with every derivation the UI ranks and
/// displays.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnrichedBusiness {
    /// Upstream identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Joined postal address.
    pub address: String,
    /// Internal category tag.
    pub category: Category,
    /// Haversine distance from the query origin, in miles.
    pub distance_miles: f64,
    /// Upstream rating converted to a 0-5 scale, one decimal place.
    pub rating_out_of_five: Option<f64>,
    /// Whether the hours evidence says the place is open past ~1 AM.
    pub is_late_night: bool,
    /// Strength of the late-night evidence.
    pub late_night_level: LateNightLevel,
    /// Ranking signal in `0..=50`; a sort key, not a probability.
    pub late_night_score: u8,
    /// Heuristic safety rating in `1..=5`.
    pub safety_rating: u8,
    /// Category-derived feature tags.
    pub features: Vec<String>,
    /// Human description of today's schedule.
    pub todays_hours: TodaysHours,
    /// Ride-share estimate to reach the place.
    pub ride: RideEstimate,
    /// Contact number passthrough.
    pub tel: Option<String>,
    /// Website passthrough.
    pub website: Option<String>,
}
