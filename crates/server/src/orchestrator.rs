//! # Dashboard Orchestrator
//!
//! This module coordinates one full dashboard render:
//! 1. Take the current control values (axes, year range, runtime bucket)
//! 2. Build the treemap, scatter and filtered-table specs in parallel
//! 3. Assemble the data preview
//! 4. Return a complete [`DashboardSnapshot`]
//!
//! The host UI re-invokes [`DashboardOrchestrator::render`] on every widget
//! interaction; there is no cross-run state beyond the immutable loaded
//! table, so any two renders with equal controls return equal snapshots.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use data_loader::MovieTable;
use pipeline::{Controls, DataPreview, FilteredTable, ScatterSpec, TreemapSpec, expand_genres};

/// Everything one interaction renders: the four dashboard outputs plus the
/// controls they were built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub controls: Controls,
    pub preview: DataPreview,
    pub treemap: TreemapSpec,
    pub scatter: ScatterSpec,
    pub filtered_table: FilteredTable,
}

/// Main orchestrator that re-renders the dashboard per interaction
#[derive(Clone)]
pub struct DashboardOrchestrator {
    table: Arc<MovieTable>,
}

impl DashboardOrchestrator {
    /// Create an orchestrator over an already-loaded table
    pub fn new(table: Arc<MovieTable>) -> Self {
        Self { table }
    }

    /// Borrow the loaded table
    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    /// Render one dashboard snapshot for the given controls.
    ///
    /// The three chart builds are independent read-only projections, so they
    /// fan out onto blocking threads and join.
    pub async fn render(&self, controls: Controls) -> Result<DashboardSnapshot> {
        let start_time = Instant::now();

        let (treemap_result, scatter_result, table_result) = tokio::join!(
            tokio::task::spawn_blocking({
                let table = self.table.clone();
                move || {
                    let entries = expand_genres(&table);
                    TreemapSpec::build(&entries)
                }
            }),
            tokio::task::spawn_blocking({
                let table = self.table.clone();
                move || ScatterSpec::build(&table, controls.x_axis, controls.y_axis)
            }),
            tokio::task::spawn_blocking({
                let table = self.table.clone();
                move || FilteredTable::build(&table, &controls)
            }),
        );

        let treemap = treemap_result.context("Treemap build task panicked")?;
        let scatter = scatter_result.context("Scatter build task panicked")?;
        let filtered_table = table_result.context("Filtered-table build task panicked")?;

        let preview = DataPreview::build(&self.table);

        info!(
            "Rendered dashboard in {:.2?}: {} treemap leaves, {} scatter points, {}/{} filtered rows",
            start_time.elapsed(),
            treemap.leaves.len(),
            scatter.points.len(),
            filtered_table.rows.len(),
            self.table.len()
        );

        Ok(DashboardSnapshot {
            controls,
            preview,
            treemap,
            scatter,
            filtered_table,
        })
    }
}
