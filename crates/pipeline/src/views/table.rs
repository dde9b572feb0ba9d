//! Filtered movie table: year range AND runtime bucket.
//!
//! Works over the cleaned, non-expanded rows. A row survives when its year
//! falls in the inclusive [min, max] slider range and its normalized runtime
//! falls in the selected bucket's half-open minute range.

use crate::controls::Controls;
use data_loader::{CleanedMovie, MovieTable};
use serde::{Deserialize, Serialize};

/// The filtered table view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredTable {
    /// Controls the rows were filtered by
    pub year_range: (data_loader::Year, data_loader::Year),
    pub runtime_bucket: String,
    pub rows: Vec<CleanedMovie>,
}

impl FilteredTable {
    /// Build the filtered table, keeping source row order
    pub fn build(table: &MovieTable, controls: &Controls) -> Self {
        let (year_min, year_max) = controls.year_range;
        let rows = table
            .movies()
            .iter()
            .filter(|movie| movie.year >= year_min && movie.year <= year_max)
            .filter(|movie| controls.runtime_bucket.contains(movie.run_time_minutes))
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(
            "Filtered table: {} of {} rows (years {}-{}, bucket '{}')",
            rows.len(),
            table.len(),
            year_min,
            year_max,
            controls.runtime_bucket
        );

        Self {
            year_range: controls.year_range,
            runtime_bucket: controls.runtime_bucket.label().to_string(),
            rows,
        }
    }
}
