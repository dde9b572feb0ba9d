//! Simple test harness for the dashboard orchestrator.
//!
//! This binary renders the dashboard once with default controls and logs a
//! summary of each view, which is enough to eyeball the full pipeline.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use data_loader::MovieTable;
use pipeline::Controls;
use server::DashboardOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,pipeline=debug,data_loader=debug")
        .init();

    info!("Starting dashboard render harness");

    let path = Path::new("data/IMDB Top 250 Movies.csv");
    let table = Arc::new(MovieTable::load_from_csv(path)?);
    info!("Loaded {} movies", table.len());

    let orchestrator = DashboardOrchestrator::new(table);
    let snapshot = orchestrator.render(Controls::default()).await?;

    info!("Preview rows: {}", snapshot.preview.rows.len());
    info!(
        "Treemap: {} leaves on path [{}, {}]",
        snapshot.treemap.leaves.len(),
        snapshot.treemap.path[0],
        snapshot.treemap.path[1]
    );
    info!(
        "Scatter: {} points ({} vs {})",
        snapshot.scatter.points.len(),
        snapshot.scatter.x_label,
        snapshot.scatter.y_label
    );
    info!(
        "Filtered table: {} rows (years {}-{}, bucket '{}')",
        snapshot.filtered_table.rows.len(),
        snapshot.filtered_table.year_range.0,
        snapshot.filtered_table.year_range.1,
        snapshot.filtered_table.runtime_bucket
    );

    Ok(())
}
