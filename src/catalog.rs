//! Game catalog shown by the launcher.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// One game in the launcher list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title.
    title: String,
    /// Preview identifier, resolved to `<asset_dir>/<image>.svg`.
    image: String,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
        }
    }

    /// Path of the preview image for this entry.
    pub fn asset_path(&self, asset_dir: impl AsRef<Path>) -> PathBuf {
        asset_dir.as_ref().join(format!("{}.svg", self.image))
    }
}

/// Ordered list of games, as supplied by the catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameCatalog {
    entries: Vec<CatalogEntry>,
}

impl GameCatalog {
    /// Creates a catalog from entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Loads the catalog from a JSON array of `{title, image}` records.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        debug!("Loading game catalog");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read catalog: {}", e)))?;
        let catalog = Self::from_json(&content)?;
        info!(games = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(content)
            .map_err(|e| CatalogError::new(format!("Failed to parse catalog: {}", e)))
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
