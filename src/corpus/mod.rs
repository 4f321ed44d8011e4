//! Source tables for the recommendation engine.
//!
//! The corpus is two immutable tables: an interaction log (user, item,
//! rating, timestamp) and an item catalog (id, title, description, image).
//! Loading never fails the process: an unreadable file degrades to an empty
//! table with one logged warning, and rows with missing required fields are
//! dropped, so the engine can always be built, possibly in an empty,
//! all-queries-return-nothing state.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// One row of the interaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// User identifier (opaque).
    pub user_id: String,
    /// Item identifier (opaque, case-sensitive).
    pub item_id: String,
    /// Rating value, 1–5 in the source data.
    pub rating: f32,
    /// Unix timestamp (seconds).
    pub timestamp: i64,
}

impl Interaction {
    /// Convenience constructor.
    pub fn new(
        user_id: impl Into<String>,
        item_id: impl Into<String>,
        rating: f32,
        timestamp: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            rating,
            timestamp,
        }
    }
}

/// One row of the item catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Item identifier (unique, opaque, case-sensitive). Join key for every
    /// downstream component and for external callers.
    pub item_id: String,
    /// Display title.
    pub title: String,
    /// Free-text description used by the content ranker.
    pub description: String,
    /// Display image URL.
    pub image_url: String,
}

impl CatalogEntry {
    /// Convenience constructor.
    pub fn new(
        item_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}

/// An immutable snapshot of the two source tables.
///
/// # Examples
///
/// ```
/// use sugerir::corpus::{CatalogEntry, Corpus, Interaction};
///
/// let corpus = Corpus::new(
///     vec![Interaction::new("u1", "p1", 5.0, 1_369_699_200)],
///     vec![CatalogEntry::new("p1", "Red Lipstick", "long lasting red lipstick", "")],
/// );
/// assert_eq!(corpus.interactions().len(), 1);
/// assert_eq!(corpus.catalog().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    interactions: Vec<Interaction>,
    catalog: Vec<CatalogEntry>,
}

impl Corpus {
    /// Creates a corpus from in-memory tables.
    #[must_use]
    pub fn new(interactions: Vec<Interaction>, catalog: Vec<CatalogEntry>) -> Self {
        Self {
            interactions,
            catalog,
        }
    }

    /// Loads a corpus from two CSV files.
    ///
    /// Expected headers: `user_id,item_id,rating,timestamp` for the
    /// interaction log and `item_id,title,description,image_url` for the
    /// catalog. A file that cannot be read or parsed degrades to an empty
    /// table (logged once); individual malformed rows are dropped.
    #[must_use]
    pub fn load(interactions_path: &Path, catalog_path: &Path) -> Self {
        let interactions = match read_csv::<Interaction>(interactions_path) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    path = %interactions_path.display(),
                    error = %e,
                    "failed to read interaction log; continuing with empty table"
                );
                Vec::new()
            }
        };
        let catalog = match read_csv::<CatalogEntry>(catalog_path) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    path = %catalog_path.display(),
                    error = %e,
                    "failed to read catalog; continuing with empty table"
                );
                Vec::new()
            }
        };

        let interactions: Vec<Interaction> = interactions
            .into_iter()
            .filter(|r| !r.user_id.is_empty() && !r.item_id.is_empty())
            .collect();
        let catalog: Vec<CatalogEntry> = catalog
            .into_iter()
            .filter(|r| !r.item_id.is_empty() && !r.description.is_empty())
            .collect();

        debug!(
            interactions = interactions.len(),
            catalog = catalog.len(),
            "corpus loaded"
        );
        Self {
            interactions,
            catalog,
        }
    }

    /// The interaction log.
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// The item catalog.
    #[must_use]
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }
}

/// Reads every deserializable row of a CSV file, dropping malformed rows.
fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| e.to_string())?;
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for record in reader.deserialize::<T>() {
        match record {
            Ok(row) => rows.push(row),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(path = %path.display(), dropped, "dropped malformed csv rows");
    }
    Ok(rows)
}
