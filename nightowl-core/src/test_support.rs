//! Test-only `PlaceSource` doubles used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{Category, Place, PlaceSource, SearchQuery, SourceError};

/// In-memory `PlaceSource` serving fixed per-category batches.
///
/// Categories without a registered batch return an empty result;
/// categories marked as failing return a request error, which lets
/// tests exercise the pipeline's partial-failure tolerance.
#[derive(Debug, Default)]
pub struct StaticSource {
    batches: HashMap<Category, Vec<Place>>,
    failing: Vec<Category>,
}

impl StaticSource {
    /// Source returning no places for any category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the places returned for `category`.
    #[must_use]
    pub fn with_places(mut self, category: Category, places: Vec<Place>) -> Self {
        self.batches.insert(category, places);
        self
    }

    /// Make `category` fail with a request error.
    #[must_use]
    pub fn with_failure(mut self, category: Category) -> Self {
        self.failing.push(category);
        self
    }
}

impl PlaceSource for StaticSource {
    fn search(
        &self,
        _query: &SearchQuery,
        category: Category,
    ) -> Result<Vec<Place>, SourceError> {
        if self.failing.contains(&category) {
            return Err(SourceError::Request {
                reason: format!("stubbed failure for {category}"),
            });
        }
        Ok(self.batches.get(&category).cloned().unwrap_or_default())
    }
}
