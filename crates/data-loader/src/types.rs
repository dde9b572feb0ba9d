//! Core domain types for the IMDB Top 250 dataset.
//!
//! The dataset is a single CSV of 250 top-rated films. A pipeline run loads
//! it into a [`MovieTable`], which is immutable afterwards: every view is a
//! read-only projection over it, and derived fields are pure functions of
//! the source cells.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::clean;
use crate::error::Result;
use crate::parser;

/// Release year of a movie
pub type Year = u16;

// =============================================================================
// Raw and Cleaned Movie Rows
// =============================================================================

/// One raw row of the source CSV, before cleaning.
///
/// `budget`, `box_office` and `run_time` are kept as the free text the file
/// contains ("$25,000,000", "Not Available", "2h 15m"). Columns the pipeline
/// does not interpret (rank, certificate, cast lists, ...) ride along in
/// `extras`, keyed by header name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub name: String,
    pub year: Year,
    /// Comma-separated genre labels, e.g. "Drama,Crime"
    pub genre: String,
    pub rating: f32,
    pub budget: String,
    pub box_office: String,
    pub run_time: String,
    /// Pass-through columns not interpreted by the pipeline
    pub extras: BTreeMap<String, String>,
}

/// One cleaned row: the raw row with currency fields coerced to numbers and
/// the runtime normalized to minutes.
///
/// `budget` and `box_office` are `None` when the source text could not be
/// parsed (empty, "Not Available", other residue). `None` serializes to JSON
/// `null`, which the chart layer treats as a missing point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedMovie {
    pub name: String,
    pub year: Year,
    /// Comma-separated genre labels, untouched by cleaning
    pub genre: String,
    pub rating: f32,
    pub budget: Option<f64>,
    pub box_office: Option<f64>,
    /// Original runtime text, retained for display
    pub run_time: String,
    /// Runtime normalized to minutes; `0` when the text carries no h/m marker
    pub run_time_minutes: u32,
    pub extras: BTreeMap<String, String>,
}

// =============================================================================
// MovieTable - The Loaded Dataset
// =============================================================================

/// The loaded, cleaned dataset.
///
/// Owns one [`CleanedMovie`] per source row, in file order. Methods hand out
/// borrows only; nothing mutates the table after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieTable {
    movies: Vec<CleanedMovie>,
}

impl MovieTable {
    /// Load and clean the dataset from a CSV file.
    ///
    /// This is the main entry point for loading data:
    /// 1. Parse the CSV into raw [`MovieRecord`]s (header-driven)
    /// 2. Clean currency and runtime fields into derived columns
    ///
    /// Fails with [`crate::DataLoadError`] if the file is unreadable, a
    /// required column is missing, or a typed cell (year, rating, marked
    /// runtime) is malformed.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        let records = parser::parse_movies(path)?;
        tracing::info!("Loaded {} raw movie rows from {:?}", records.len(), path);

        let movies = clean::clean_records(records)?;
        tracing::info!("Cleaned {} movie rows", movies.len());

        Ok(Self { movies })
    }

    /// Build a table from already-cleaned rows (used by tests and benches)
    pub fn from_movies(movies: Vec<CleanedMovie>) -> Self {
        Self { movies }
    }

    /// Borrow all rows, in file order
    pub fn movies(&self) -> &[CleanedMovie] {
        &self.movies
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// True when the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie(name: &str, year: Year) -> CleanedMovie {
        CleanedMovie {
            name: name.to_string(),
            year,
            genre: "Drama".to_string(),
            rating: 8.0,
            budget: Some(1_000_000.0),
            box_office: Some(2_000_000.0),
            run_time: "2h".to_string(),
            run_time_minutes: 120,
            extras: BTreeMap::new(),
        }
    }

    #[test]
    fn test_table_preserves_row_order() {
        let table = MovieTable::from_movies(vec![
            sample_movie("First", 1972),
            sample_movie("Second", 1994),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.movies()[0].name, "First");
        assert_eq!(table.movies()[1].name, "Second");
    }

    #[test]
    fn test_empty_table() {
        let table = MovieTable::from_movies(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
