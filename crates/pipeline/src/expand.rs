//! Genre expansion: one entry per (movie, genre token) pair.
//!
//! The `genre` column holds comma-separated labels ("Drama,Crime"). The
//! treemap aggregates by single genre, so each movie row is duplicated once
//! per token. Tokens are NOT trimmed: the dataset's own labels are taken
//! verbatim, so "Drama" and " Drama" stay distinct.

use data_loader::{MovieTable, Year};
use serde::{Deserialize, Serialize};

/// One (movie, single genre) pair, feeding the treemap hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreEntry {
    /// Single genre token, untrimmed
    pub genre: String,
    pub name: String,
    pub year: Year,
    pub rating: f32,
}

/// Expand every movie into one entry per comma-separated genre token.
///
/// The output length equals the sum over all movies of
/// `1 + count(',', genre)`; even an empty genre cell yields one entry with
/// an empty token.
pub fn expand_genres(table: &MovieTable) -> Vec<GenreEntry> {
    let mut entries = Vec::new();
    for movie in table.movies() {
        for token in movie.genre.split(',') {
            entries.push(GenreEntry {
                genre: token.to_string(),
                name: movie.name.clone(),
                year: movie.year,
                rating: movie.rating,
            });
        }
    }

    tracing::debug!(
        "Expanded {} movies into {} genre entries",
        table.len(),
        entries.len()
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::CleanedMovie;
    use std::collections::BTreeMap;

    fn movie(name: &str, genre: &str, rating: f32) -> CleanedMovie {
        CleanedMovie {
            name: name.to_string(),
            year: 1999,
            genre: genre.to_string(),
            rating,
            budget: None,
            box_office: None,
            run_time: String::new(),
            run_time_minutes: 0,
            extras: BTreeMap::new(),
        }
    }

    #[test]
    fn test_expansion_row_count_law() {
        let table = MovieTable::from_movies(vec![
            movie("A", "Drama,Crime", 8.5),
            movie("B", "Comedy", 7.9),
            movie("C", "Action,Adventure,Sci-Fi", 8.0),
        ]);

        let expected: usize = table
            .movies()
            .iter()
            .map(|m| 1 + m.genre.matches(',').count())
            .sum();

        let entries = expand_genres(&table);
        assert_eq!(entries.len(), expected);
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn test_tokens_are_not_trimmed() {
        let table = MovieTable::from_movies(vec![movie("A", "Drama, Crime", 8.5)]);
        let entries = expand_genres(&table);

        assert_eq!(entries[0].genre, "Drama");
        assert_eq!(entries[1].genre, " Crime");
    }

    #[test]
    fn test_movie_fields_are_duplicated() {
        let table = MovieTable::from_movies(vec![movie("X", "Drama,Crime", 8.5)]);
        let entries = expand_genres(&table);

        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert_eq!(entry.name, "X");
            assert_eq!(entry.rating, 8.5);
            assert_eq!(entry.year, 1999);
        }
    }

    #[test]
    fn test_empty_genre_yields_single_empty_token() {
        let table = MovieTable::from_movies(vec![movie("A", "", 8.0)]);
        let entries = expand_genres(&table);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].genre, "");
    }
}
