//! Operating-hours data as supplied by the places API.
//!
//! Times travel as HHMM integers (130 is 1:30 AM, 2330 is 11:30 PM) but
//! the feed occasionally delivers strings or out-of-range values.
//! [`RawTime`] keeps the raw payload and exposes a checked view so
//! derivations can fail open on malformed data instead of hiding a
//! business.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weekly operating hours for a place.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HoursData {
    /// Free-text hours summary, e.g. "Open 24 hours".
    #[cfg_attr(feature = "serde", serde(default))]
    pub display: Option<String>,
    /// Structured per-weekday schedules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regular: Vec<DaySchedule>,
}

impl HoursData {
    /// Hours known only through a display string.
    #[must_use]
    pub fn from_display(display: impl Into<String>) -> Self {
        Self {
            display: Some(display.into()),
            regular: Vec::new(),
        }
    }

    /// Hours known only through structured schedules.
    #[must_use]
    pub fn from_regular(regular: Vec<DaySchedule>) -> Self {
        Self {
            display: None,
            regular,
        }
    }
}

/// Open intervals for one weekday.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaySchedule {
    /// Day index, `0` = Sunday through `6` = Saturday.
    pub day: u8,
    /// Open intervals in schedule order; split hours yield several.
    #[cfg_attr(feature = "serde", serde(default))]
    pub open: Vec<OpenInterval>,
}

/// A single open interval in HHMM encoding.
///
/// An interval whose end is numerically below its start closes on the
/// following calendar day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenInterval {
    /// Opening time.
    pub start: RawTime,
    /// Closing time.
    pub end: RawTime,
}

impl OpenInterval {
    /// Build an interval from already-encoded HHMM values.
    #[must_use]
    pub const fn from_hhmm(start: u16, end: u16) -> Self {
        Self {
            start: RawTime::Number(start as i64),
            end: RawTime::Number(end as i64),
        }
    }
}

/// A clock time as delivered by the API.
///
/// Usually an HHMM integer, sometimes a decimal string, occasionally
/// garbage. The checked [`hhmm`](Self::hhmm) view is the only way to
/// read it as a time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawTime {
    /// Numeric HHMM payload.
    Number(i64),
    /// String payload, expected to parse as an HHMM integer.
    Text(String),
}

impl RawTime {
    /// Checked HHMM view of the value.
    ///
    /// Returns `None` for anything outside `0..=2400` or with a minutes
    /// component of 60 or more. Callers treat `None` as malformed hours
    /// and fail open.
    ///
    /// # Examples
    /// ```
    /// use nightowl_core::RawTime;
    ///
    /// assert_eq!(RawTime::Number(2330).hhmm(), Some(2330));
    /// assert_eq!(RawTime::Text("0130".into()).hhmm(), Some(130));
    /// assert_eq!(RawTime::Text("late".into()).hhmm(), None);
    /// assert_eq!(RawTime::Number(2475).hhmm(), None);
    /// ```
    #[must_use]
    pub fn hhmm(&self) -> Option<u16> {
        let raw = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<i64>().ok()?,
        };
        let value = u16::try_from(raw).ok()?;
        if value > 2400 || value % 100 > 59 {
            return None;
        }
        Some(value)
    }
}

impl From<u16> for RawTime {
    fn from(value: u16) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Render an HHMM value as a 12-hour clock string.
///
/// Both `0` and `2400` render as midnight.
///
/// # Examples
/// ```
/// use nightowl_core::format_hhmm;
///
/// assert_eq!(format_hhmm(0), "12:00 AM");
/// assert_eq!(format_hhmm(130), "1:30 AM");
/// assert_eq!(format_hhmm(1200), "12:00 PM");
/// assert_eq!(format_hhmm(2330), "11:30 PM");
/// ```
#[expect(
    clippy::integer_division,
    reason = "HHMM encoding packs hours into the upper digits"
)]
#[must_use]
pub fn format_hhmm(value: u16) -> String {
    let hours = value / 100;
    let minutes = value % 100;
    match hours {
        0 | 24 => format!("12:{minutes:02} AM"),
        1..=11 => format!("{hours}:{minutes:02} AM"),
        12 => format!("12:{minutes:02} PM"),
        _ => format!("{}:{minutes:02} PM", hours - 12),
    }
}
