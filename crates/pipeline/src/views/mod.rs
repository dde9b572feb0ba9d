//! View builders: read-only projections from the cleaned table to
//! serializable view specifications.
//!
//! Each spec describes marks and encodings for the external chart layer;
//! none of them render anything. All builders are pure functions of
//! (table, controls), so re-running them with the same inputs yields
//! identical specs.

pub mod preview;
pub mod scatter;
pub mod table;
pub mod treemap;

pub use preview::DataPreview;
pub use scatter::{ScatterPoint, ScatterSpec};
pub use table::FilteredTable;
pub use treemap::{TreemapLeaf, TreemapSpec};
