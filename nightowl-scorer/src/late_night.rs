//! Late-night classification over hours evidence.
//!
//! Two independent, consistent views of the same data: the boolean
//! classifier [`is_open_late`] and the ordinal leveler
//! [`classify_level`]. Both match display text first and fall back to
//! the structured weekly schedules, scanning **every** interval of
//! **every** day: one late-closing day anywhere in the week is
//! enough. Malformed interval values contribute no evidence.

use nightowl_core::{HoursData, LateNightLevel, OpenInterval, format_hhmm};

use crate::contains_any;

const DISPLAY_ALWAYS_OPEN: [&str; 3] = ["24 hours", "24/7", "always open"];
const DISPLAY_LATE_TOKENS: [&str; 10] = [
    "midnight", "12:00 am", "1 am", "1:00 am", "2 am", "2:00 am", "3 am", "3:00 am", "4 am",
    "4:00 am",
];

const LEVEL_ALWAYS_OPEN: [&str; 4] = ["24 hours", "24/7", "always open", "open 24"];
const LEVEL_VERY_LATE: [&str; 6] = ["3:00 am", "3 am", "4:00 am", "4 am", "5:00 am", "5 am"];
const LEVEL_LATE: [&str; 6] = ["1:00 am", "1 am", "2:00 am", "2 am", "midnight", "12:00 am"];

/// Closing times in this window count as late-night evidence.
const LATE_CLOSE_WINDOW: std::ops::RangeInclusive<u16> = 100..=600;
/// Threshold within the window that upgrades "late" to "very late".
const VERY_LATE_THRESHOLD: u16 = 300;

/// Whether the hours evidence says this place is open past ~1 AM.
///
/// Optimistic inclusion: a single qualifying interval anywhere in the
/// week returns `true`; only a full scan with no evidence returns
/// `false`.
///
/// # Examples
/// ```
/// use nightowl_core::HoursData;
/// use nightowl_scorer::is_open_late;
///
/// assert!(is_open_late(Some(&HoursData::from_display("Open 24/7"))));
/// assert!(!is_open_late(None));
/// ```
#[must_use]
pub fn is_open_late(hours: Option<&HoursData>) -> bool {
    let Some(hours) = hours else {
        return false;
    };
    if let Some(display) = hours.display.as_deref() {
        let lowered = display.to_lowercase();
        if contains_any(&lowered, &DISPLAY_ALWAYS_OPEN)
            || contains_any(&lowered, &DISPLAY_LATE_TOKENS)
        {
            return true;
        }
    }
    hours
        .regular
        .iter()
        .flat_map(|schedule| schedule.open.iter())
        .any(interval_runs_late)
}

fn interval_runs_late(interval: &OpenInterval) -> bool {
    let (Some(start), Some(end)) = (interval.start.hhmm(), interval.end.hhmm()) else {
        return false;
    };
    end < start || LATE_CLOSE_WINDOW.contains(&end) || end == 0 || end == 2400
}

/// Outcome of the leveler: ordinal level plus display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LateNightAnalysis {
    /// Ordinal strength of the evidence.
    pub level: LateNightLevel,
    /// Short status line, e.g. "Open until 3AM+".
    pub status: String,
    /// Hours text to show alongside the status.
    pub display: String,
}

impl LateNightAnalysis {
    fn check_hours(display: &str) -> Self {
        Self {
            level: LateNightLevel::CheckHours,
            status: "Hours unknown".to_owned(),
            display: display.to_owned(),
        }
    }
}

/// Map hours evidence onto an ordinal late-night level.
///
/// Priority order, first match wins: 24/7 display text, very-late
/// display tokens, late/midnight display tokens, then the structured
/// schedules (a midnight-spanning interval reads as 24/7; otherwise
/// the latest late-window closing time decides). No evidence anywhere
/// yields [`LateNightLevel::CheckHours`].
#[must_use]
pub fn classify_level(hours: Option<&HoursData>) -> LateNightAnalysis {
    let Some(hours) = hours else {
        return LateNightAnalysis::check_hours("Check hours");
    };
    let display = hours.display.clone().unwrap_or_default();
    let lowered = display.to_lowercase();

    if contains_any(&lowered, &LEVEL_ALWAYS_OPEN) {
        return LateNightAnalysis {
            level: LateNightLevel::TwentyFourSeven,
            status: "Open 24/7".to_owned(),
            display: "24/7".to_owned(),
        };
    }
    if contains_any(&lowered, &LEVEL_VERY_LATE) {
        return LateNightAnalysis {
            level: LateNightLevel::OpenVeryLate,
            status: "Open until 3AM+".to_owned(),
            display,
        };
    }
    if contains_any(&lowered, &LEVEL_LATE) {
        return LateNightAnalysis {
            level: LateNightLevel::OpenLate,
            status: "Open until 1-2AM".to_owned(),
            display,
        };
    }
    if let Some(analysis) = level_from_schedule(hours) {
        return analysis;
    }
    if display.is_empty() {
        LateNightAnalysis::check_hours("Check hours")
    } else {
        LateNightAnalysis::check_hours(&display)
    }
}

fn level_from_schedule(hours: &HoursData) -> Option<LateNightAnalysis> {
    let mut spans_midnight = false;
    let mut closes_at_midnight = false;
    let mut latest_late_end: Option<u16> = None;

    for interval in hours.regular.iter().flat_map(|schedule| schedule.open.iter()) {
        let (Some(start), Some(end)) = (interval.start.hhmm(), interval.end.hhmm()) else {
            continue;
        };
        if end < start {
            spans_midnight = true;
        }
        if LATE_CLOSE_WINDOW.contains(&end) {
            latest_late_end = Some(latest_late_end.map_or(end, |latest| latest.max(end)));
        }
        // Closing exactly at midnight only counts when observed; a bare
        // zero default must not promote every schedule to "Open Late".
        if end == 0 || end == 2400 {
            closes_at_midnight = true;
        }
    }

    if spans_midnight {
        return Some(LateNightAnalysis {
            level: LateNightLevel::TwentyFourSeven,
            status: "Open 24/7".to_owned(),
            display: "24 hours".to_owned(),
        });
    }
    if let Some(latest) = latest_late_end {
        if latest >= VERY_LATE_THRESHOLD {
            return Some(LateNightAnalysis {
                level: LateNightLevel::OpenVeryLate,
                status: "Open until 3AM+".to_owned(),
                display: format!("Until {}", format_hhmm(latest)),
            });
        }
        return Some(LateNightAnalysis {
            level: LateNightLevel::OpenLate,
            status: "Open until 1AM+".to_owned(),
            display: format!("Until {}", format_hhmm(latest)),
        });
    }
    if closes_at_midnight {
        return Some(LateNightAnalysis {
            level: LateNightLevel::OpenLate,
            status: "Open until 1AM+".to_owned(),
            display: "Until midnight".to_owned(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightowl_core::{DaySchedule, RawTime};
    use rstest::rstest;

    fn schedule(day: u8, intervals: &[(u16, u16)]) -> DaySchedule {
        DaySchedule {
            day,
            open: intervals
                .iter()
                .map(|&(start, end)| OpenInterval::from_hhmm(start, end))
                .collect(),
        }
    }

    #[rstest]
    #[case("Open 24 hours")]
    #[case("open 24/7 for your convenience")]
    #[case("Always open")]
    #[case("Open until midnight")]
    #[case("Daily until 12:00 AM")]
    #[case("Fri-Sat until 2 AM")]
    #[case("Open til 4:00 AM")]
    fn display_tokens_classify_late(#[case] display: &str) {
        assert!(is_open_late(Some(&HoursData::from_display(display))));
    }

    #[test]
    fn display_without_tokens_defers_to_schedule() {
        let mut hours = HoursData::from_display("Open late most nights");
        hours.regular = vec![schedule(5, &[(1800, 230)])];
        assert!(is_open_late(Some(&hours)));
    }

    #[rstest]
    #[case(&[(900, 1700)], false)]
    #[case(&[(2200, 600)], true)] // spans midnight
    #[case(&[(0, 100)], true)] // closes inside the late window
    #[case(&[(600, 2400)], true)] // closes exactly at midnight
    #[case(&[(900, 1700), (1800, 2300)], false)]
    fn schedule_evidence(#[case] intervals: &[(u16, u16)], #[case] expected: bool) {
        let hours = HoursData::from_regular(vec![schedule(1, intervals)]);
        assert_eq!(is_open_late(Some(&hours)), expected);
    }

    #[test]
    fn a_single_late_day_is_sufficient() {
        let hours = HoursData::from_regular(vec![
            schedule(0, &[(900, 1700)]),
            schedule(1, &[(900, 1700)]),
            schedule(5, &[(900, 1700), (1800, 300)]),
        ]);
        assert!(is_open_late(Some(&hours)));
    }

    #[test]
    fn malformed_intervals_contribute_no_evidence() {
        let hours = HoursData::from_regular(vec![DaySchedule {
            day: 2,
            open: vec![OpenInterval {
                start: RawTime::Text("dusk".to_owned()),
                end: RawTime::Text("dawn".to_owned()),
            }],
        }]);
        assert!(!is_open_late(Some(&hours)));
    }

    #[test]
    fn absent_hours_are_not_late() {
        assert!(!is_open_late(None));
    }

    #[rstest]
    #[case("Open 24 hours", LateNightLevel::TwentyFourSeven, "Open 24/7")]
    #[case("Until 3:00 AM", LateNightLevel::OpenVeryLate, "Open until 3AM+")]
    #[case("Until 1 AM nightly", LateNightLevel::OpenLate, "Open until 1-2AM")]
    #[case("Open until midnight", LateNightLevel::OpenLate, "Open until 1-2AM")]
    fn level_from_display(
        #[case] display: &str,
        #[case] level: LateNightLevel,
        #[case] status: &str,
    ) {
        let analysis = classify_level(Some(&HoursData::from_display(display)));
        assert_eq!(analysis.level, level);
        assert_eq!(analysis.status, status);
    }

    #[test]
    fn absent_hours_level_is_check_hours() {
        let analysis = classify_level(None);
        assert_eq!(analysis.level, LateNightLevel::CheckHours);
        assert_eq!(analysis.display, "Check hours");
    }

    #[test]
    fn spanning_interval_levels_as_twenty_four_seven() {
        let hours = HoursData::from_regular(vec![schedule(3, &[(1800, 200)])]);
        let analysis = classify_level(Some(&hours));
        assert_eq!(analysis.level, LateNightLevel::TwentyFourSeven);
    }

    #[rstest]
    #[case(&[(0, 300)], LateNightLevel::OpenVeryLate)]
    #[case(&[(0, 130)], LateNightLevel::OpenLate)]
    fn latest_late_close_decides_level(
        #[case] intervals: &[(u16, u16)],
        #[case] expected: LateNightLevel,
    ) {
        // Early-morning intervals: end >= start keeps these out of the
        // spans-midnight branch.
        let hours = HoursData::from_regular(vec![schedule(4, intervals)]);
        assert_eq!(classify_level(Some(&hours)).level, expected);
    }

    #[test]
    fn midnight_close_levels_as_open_late_only_when_observed() {
        let at_midnight = HoursData::from_regular(vec![schedule(0, &[(900, 2400)])]);
        let analysis = classify_level(Some(&at_midnight));
        assert_eq!(analysis.level, LateNightLevel::OpenLate);
        assert_eq!(analysis.display, "Until midnight");

        let daytime = HoursData::from_regular(vec![schedule(0, &[(900, 1700)])]);
        assert_eq!(
            classify_level(Some(&daytime)).level,
            LateNightLevel::CheckHours,
        );
    }

    #[test]
    fn classifier_and_leveler_agree_when_level_is_known() {
        let samples = [
            HoursData::from_display("Open 24 hours"),
            HoursData::from_display("Until 3 AM"),
            HoursData::from_regular(vec![schedule(2, &[(2000, 400)])]),
            HoursData::from_regular(vec![schedule(2, &[(900, 130)])]),
        ];
        for hours in &samples {
            let analysis = classify_level(Some(hours));
            assert_ne!(analysis.level, LateNightLevel::CheckHours);
            assert!(is_open_late(Some(hours)), "disagreement on {hours:?}");
        }
    }
}
