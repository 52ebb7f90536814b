//! "Today's hours" derivation: a human-readable summary of the current
//! day's schedule.
//!
//! Display text wins over structured data when present. Structured
//! fallback inspects only the current day's **first** interval; split
//! schedules keep their later intervals for late-night classification,
//! not for display (see [`crate::late_night`], which scans everything).

use log::debug;
use nightowl_core::{HoursData, HoursStatus, TodaysHours, format_hhmm};

use crate::contains_any;

const DISPLAY_ALWAYS_OPEN: [&str; 3] = ["24 hours", "24/7", "always open"];
const DISPLAY_VERY_LATE: [&str; 4] = ["2 am", "2:00 am", "3 am", "3:00 am"];

/// Closing times in this window read as "late" rather than "regular".
const LATE_CLOSE_WINDOW: std::ops::RangeInclusive<u16> = 200..=600;

/// Describe the current day's schedule in human terms.
///
/// `today` is a day index, `0` = Sunday through `6` = Saturday.
///
/// Malformed interval times fail open (`is_open: true`, "Check
/// hours"): unknown hours must not hide a business from results.
///
/// # Examples
/// ```
/// use nightowl_core::{HoursData, HoursStatus};
/// use nightowl_scorer::todays_hours;
///
/// let hours = HoursData::from_display("Open 24 hours");
/// let today = todays_hours(Some(&hours), 3);
/// assert_eq!(today.status, HoursStatus::TwentyFourSeven);
/// assert_eq!(today.display, "Open 24/7");
/// assert!(today.is_open);
/// ```
#[must_use]
pub fn todays_hours(hours: Option<&HoursData>, today: u8) -> TodaysHours {
    let Some(hours) = hours else {
        return TodaysHours::unknown();
    };

    if let Some(display) = hours.display.as_deref().filter(|text| !text.trim().is_empty()) {
        let lowered = display.to_lowercase();
        if contains_any(&lowered, &DISPLAY_ALWAYS_OPEN) {
            return TodaysHours {
                status: HoursStatus::TwentyFourSeven,
                display: "Open 24/7".to_owned(),
                is_open: true,
            };
        }
        if contains_any(&lowered, &DISPLAY_VERY_LATE) {
            return TodaysHours {
                status: HoursStatus::Late,
                display: display.to_owned(),
                is_open: true,
            };
        }
        if lowered != "unknown" {
            return TodaysHours {
                status: HoursStatus::Display,
                display: display.to_owned(),
                is_open: true,
            };
        }
    }

    today_from_schedule(hours, today)
}

fn today_from_schedule(hours: &HoursData, today: u8) -> TodaysHours {
    let interval = hours
        .regular
        .iter()
        .find(|schedule| schedule.day == today)
        .and_then(|schedule| schedule.open.first());
    let Some(interval) = interval else {
        return TodaysHours {
            status: HoursStatus::Closed,
            display: "Closed today".to_owned(),
            is_open: false,
        };
    };

    let (Some(start), Some(end)) = (interval.start.hhmm(), interval.end.hhmm()) else {
        debug!("malformed interval times, failing open: {interval:?}");
        return TodaysHours {
            status: HoursStatus::Unknown,
            display: "Check hours".to_owned(),
            is_open: true,
        };
    };

    if end < start {
        TodaysHours {
            status: HoursStatus::Overnight,
            display: format!("Until {} (next day)", format_hhmm(end)),
            is_open: true,
        }
    } else if LATE_CLOSE_WINDOW.contains(&end) {
        TodaysHours {
            status: HoursStatus::Late,
            display: format!("Until {}", format_hhmm(end)),
            is_open: true,
        }
    } else {
        TodaysHours {
            status: HoursStatus::Regular,
            display: format!("{} - {}", format_hhmm(start), format_hhmm(end)),
            is_open: true,
        }
    }
}
