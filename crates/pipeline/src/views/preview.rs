//! Data preview: the full cleaned dataset, unfiltered.

use data_loader::{CleanedMovie, MovieTable};
use serde::{Deserialize, Serialize};

/// The "Data Preview" panel: every cleaned row, in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPreview {
    pub rows: Vec<CleanedMovie>,
}

impl DataPreview {
    pub fn build(table: &MovieTable) -> Self {
        Self {
            rows: table.movies().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_preview_contains_every_row() {
        let movies: Vec<CleanedMovie> = (0..5)
            .map(|i| CleanedMovie {
                name: format!("Movie {}", i),
                year: 2000 + i,
                genre: "Drama".to_string(),
                rating: 8.0,
                budget: None,
                box_office: None,
                run_time: String::new(),
                run_time_minutes: 90,
                extras: BTreeMap::new(),
            })
            .collect();

        let table = MovieTable::from_movies(movies.clone());
        let preview = DataPreview::build(&table);
        assert_eq!(preview.rows, movies);
    }
}
