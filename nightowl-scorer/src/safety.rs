//! Safety rating and feature-tag heuristics.
//!
//! Presentation heuristics only: a bounded integer and fixed short tag
//! lists keyed by category, with no real-world signal behind them. The
//! tables are configuration data.

use std::collections::BTreeMap;

use nightowl_core::{Category, Place};

use crate::ScoreTables;

/// Per-category feature tag lists with a generic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTables {
    tags: BTreeMap<Category, Vec<String>>,
    fallback: Vec<String>,
}

impl FeatureTables {
    /// Feature tags for `category`.
    ///
    /// # Examples
    /// ```
    /// use nightowl_core::Category;
    /// use nightowl_scorer::FeatureTables;
    ///
    /// let features = FeatureTables::default().features(Category::Coffee);
    /// assert!(features.contains(&"Free WiFi".to_owned()));
    /// ```
    #[must_use]
    pub fn features(&self, category: Category) -> Vec<String> {
        self.tags
            .get(&category)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }

    /// Replace the tags for one category.
    pub fn set(&mut self, category: Category, tags: Vec<String>) {
        self.tags.insert(category, tags);
    }
}

impl Default for FeatureTables {
    fn default() -> Self {
        fn owned(tags: &[&str]) -> Vec<String> {
            tags.iter().map(|tag| (*tag).to_owned()).collect()
        }
        let tags = BTreeMap::from([
            (
                Category::Food,
                owned(&["Late Night Menu", "Drive-thru", "Well-lit", "Security"]),
            ),
            (
                Category::Coffee,
                owned(&["24/7 Hours", "Free WiFi", "Study Space", "Power Outlets"]),
            ),
            (
                Category::Gas,
                owned(&[
                    "24/7 Access",
                    "Well-lit Pumps",
                    "Convenience Store",
                    "Security Cameras",
                ]),
            ),
            (
                Category::Pharmacy,
                owned(&["24/7 Pickup", "Drive-thru", "Emergency Meds", "Well-lit"]),
            ),
            (
                Category::Grocery,
                owned(&["24/7 Hours", "ATM", "Hot Food", "Self Checkout"]),
            ),
            (
                Category::Gym,
                owned(&[
                    "24/7 Access",
                    "Key Card Entry",
                    "Security Cameras",
                    "Well-lit",
                ]),
            ),
            (
                Category::Services,
                owned(&["24/7 Access", "Coin-op", "Well-lit", "Security Cameras"]),
            ),
            (
                Category::Entertainment,
                owned(&["Late Hours", "Security", "Parking", "Well-lit"]),
            ),
        ]);
        Self {
            tags,
            fallback: owned(&["24/7 Access", "Well-lit", "Security", "Parking"]),
        }
    }
}

/// Heuristic 1-5 safety rating.
///
/// Base of 3, nudged up by a strong upstream rating, an always-staffed
/// category, and chain recognition; clamped to `1..=5`.
#[expect(
    clippy::float_arithmetic,
    reason = "rating normalisation from the upstream 0-10 scale"
)]
#[must_use]
pub fn safety_rating(place: &Place, category: Category, tables: &ScoreTables) -> u8 {
    let mut safety: i8 = 3;
    if let Some(rating) = place.rating {
        let normalised = rating / 2.0;
        if normalised > 4.0 {
            safety += 1;
        }
        if normalised > 4.5 {
            safety += 1;
        }
    }
    if matches!(category, Category::Gas | Category::Pharmacy) {
        safety += 1;
    }
    if tables.matches_chain(&place.name) {
        safety += 1;
    }
    u8::try_from(safety.clamp(1, 5)).unwrap_or(5)
}
