//! The heuristic ranking score.
//!
//! A bounded additive signal used purely for sort ordering. The tables
//! are configuration data, swappable without touching the logic; only
//! the shape is contractual: bounded integer, monotonic in evidence
//! strength.

use std::collections::BTreeMap;

use nightowl_core::{Category, LateNightLevel, Place};

use crate::LateNightAnalysis;

/// Bonus for a positive late-night classification.
const LATE_NIGHT_BONUS: u16 = 10;
/// Bonus for a known late-night chain name.
const CHAIN_BONUS: u16 = 5;
/// Bonus for an upstream rating above [`HIGH_RATING_THRESHOLD`].
const RATING_BONUS: u16 = 2;
/// Upstream 0-10 rating above which the rating bonus applies.
const HIGH_RATING_THRESHOLD: f64 = 8.0;

/// Configuration tables behind the ranking score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTables {
    /// Base score per category; categories missing from the table score 1.
    pub category_base: BTreeMap<Category, u8>,
    /// Known late-night chain substrings, lower case.
    pub late_night_chains: Vec<String>,
}

impl ScoreTables {
    /// Upper bound of the ranking score.
    pub const MAX_SCORE: u8 = 50;

    /// Whether `name` contains a known late-night chain substring.
    ///
    /// Simple case-insensitive containment, never exact match.
    ///
    /// # Examples
    /// ```
    /// use nightowl_scorer::ScoreTables;
    ///
    /// let tables = ScoreTables::default();
    /// assert!(tables.matches_chain("Joe's Shell Station"));
    /// assert!(!tables.matches_chain("Corner Bakery"));
    /// ```
    #[must_use]
    pub fn matches_chain(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.late_night_chains
            .iter()
            .any(|chain| lowered.contains(chain.as_str()))
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        let category_base = BTreeMap::from([
            (Category::Gas, 9),
            (Category::Food, 8),
            (Category::Grocery, 8),
            (Category::Pharmacy, 7),
            (Category::Coffee, 6),
            (Category::Gym, 4),
            (Category::Services, 3),
            (Category::Entertainment, 2),
        ]);
        let late_night_chains = [
            "7-eleven",
            "circle k",
            "mcdonalds",
            "taco bell",
            "dennys",
            "ihop",
            "cvs",
            "walgreens",
            "shell",
            "chevron",
            "24 hour fitness",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect();
        Self {
            category_base,
            late_night_chains,
        }
    }
}

/// Combine the classification evidence into a ranking score.
///
/// Additive over: late-night flag (+10), level (15/10/5/0 from 24/7
/// down to check-hours), category base, chain name (+5), and a high
/// upstream rating (+2); clamped to `0..=50`. A sort key only, with
/// no probabilistic meaning.
#[must_use]
pub fn late_night_score(
    place: &Place,
    category: Category,
    is_late: bool,
    analysis: &LateNightAnalysis,
    tables: &ScoreTables,
) -> u8 {
    let mut score: u16 = 0;
    if is_late {
        score += LATE_NIGHT_BONUS;
    }
    score += level_bonus(analysis.level);
    score += u16::from(tables.category_base.get(&category).copied().unwrap_or(1));
    if tables.matches_chain(&place.name) {
        score += CHAIN_BONUS;
    }
    if place.rating.is_some_and(|rating| rating > HIGH_RATING_THRESHOLD) {
        score += RATING_BONUS;
    }
    let clamped = score.min(u16::from(ScoreTables::MAX_SCORE));
    u8::try_from(clamped).unwrap_or(ScoreTables::MAX_SCORE)
}

/// Score contribution per level, strictly decreasing with weaker
/// evidence.
#[must_use]
pub const fn level_bonus(level: LateNightLevel) -> u16 {
    match level {
        LateNightLevel::TwentyFourSeven => 15,
        LateNightLevel::OpenVeryLate => 10,
        LateNightLevel::OpenLate => 5,
        LateNightLevel::CheckHours => 0,
    }
}
