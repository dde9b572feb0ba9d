//! Pipeline for turning the cleaned movie table into dashboard views.
//!
//! This crate provides:
//! - Controls: sidebar state as an explicit value (axes, year range, bucket)
//! - Genre expansion for the treemap hierarchy
//! - View builders producing serializable chart/table specifications
//!
//! ## Architecture
//! Every user interaction re-runs the same linear pipeline:
//! 1. Genre expansion duplicates each movie once per genre token
//! 2. View builders project the table into treemap, scatter, filtered-table
//!    and preview specs, parameterized by the current controls
//!
//! All stages are pure functions over the immutable [`data_loader::MovieTable`],
//! so a re-run with unchanged inputs produces identical specs.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Controls, expand_genres, TreemapSpec, ScatterSpec, FilteredTable};
//!
//! let controls = Controls::default();
//!
//! let entries = expand_genres(&table);
//! let treemap = TreemapSpec::build(&entries);
//! let scatter = ScatterSpec::build(&table, controls.x_axis, controls.y_axis);
//! let filtered = FilteredTable::build(&table, &controls);
//! ```

pub mod controls;
pub mod expand;
pub mod views;

// Re-export main types
pub use controls::{Controls, RuntimeBucket, XAxis, YAxis, YEAR_DOMAIN_MAX, YEAR_DOMAIN_MIN};
pub use expand::{GenreEntry, expand_genres};
pub use views::{DataPreview, FilteredTable, ScatterPoint, ScatterSpec, TreemapLeaf, TreemapSpec};
