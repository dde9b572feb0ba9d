//! Treemap specification: movies nested under genres.
//!
//! Built from the genre-expanded entries, never filtered by year or runtime.
//! Each leaf sits on the [genre, name] hierarchy path with the movie's
//! rating as both area value and color value.

use crate::expand::GenreEntry;
use serde::{Deserialize, Serialize};

/// Continuous color scale used by the chart layer
const COLOR_SCALE: &str = "Blues";

/// One leaf rectangle of the treemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapLeaf {
    /// First hierarchy level (single genre token)
    pub genre: String,
    /// Second hierarchy level (movie name, not guaranteed unique)
    pub name: String,
    /// Leaf area value
    pub value: f32,
    /// Color value, same metric as the area
    pub color: f32,
}

/// Specification of the genre treemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapSpec {
    pub title: String,
    /// Hierarchy column names, outermost first
    pub path: [String; 2],
    pub color_scale: String,
    pub leaves: Vec<TreemapLeaf>,
}

impl TreemapSpec {
    /// Build the treemap spec from genre-expanded entries, in entry order
    pub fn build(entries: &[GenreEntry]) -> Self {
        let leaves = entries
            .iter()
            .map(|entry| TreemapLeaf {
                genre: entry.genre.clone(),
                name: entry.name.clone(),
                value: entry.rating,
                color: entry.rating,
            })
            .collect::<Vec<_>>();

        tracing::debug!("Built treemap spec with {} leaves", leaves.len());

        Self {
            title: "Treemap of Movies by Genre".to_string(),
            path: ["genre".to_string(), "name".to_string()],
            color_scale: COLOR_SCALE.to_string(),
            leaves,
        }
    }
}
