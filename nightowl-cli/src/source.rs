//! Place source backed by a JSON snapshot on disk.

use nightowl_core::{Category, Place, PlaceSource, SearchQuery, SourceError};
use serde::Deserialize;
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use crate::CliError;

/// Offline [`PlaceSource`] serving pre-fetched results from a file.
///
/// The snapshot is a single JSON object keyed by category name, each
/// value holding the place records returned for that category:
///
/// ```json
/// {
///     "gas": [{"id": "fsq1", "name": "Shell", "location": {"lat": 37.8, "lng": -122.27}}],
///     "food": []
/// }
/// ```
///
/// Categories absent from the snapshot yield no results rather than an
/// error, so partial snapshots still search cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FileSource {
    batches: HashMap<String, Vec<Place>>,
}

impl FileSource {
    /// Load a snapshot from `path`.
    ///
    /// # Errors
    /// Returns [`CliError::OpenSnapshot`] when the file cannot be read
    /// and [`CliError::ParseSnapshot`] when its contents do not match
    /// the expected shape.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let file = File::open(path).map_err(|source| CliError::OpenSnapshot {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| CliError::ParseSnapshot {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl PlaceSource for FileSource {
    fn search(&self, _query: &SearchQuery, category: Category) -> Result<Vec<Place>, SourceError> {
        Ok(self
            .batches
            .get(category.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
