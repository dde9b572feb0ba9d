use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{MovieTable, Year};
use pipeline::{Controls, RuntimeBucket, XAxis, YEAR_DOMAIN_MAX, YEAR_DOMAIN_MIN};
use server::DashboardOrchestrator;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

/// Top250Dash - IMDB Top 250 Movies Dashboard
#[derive(Parser)]
#[command(name = "top250-dash")]
#[command(about = "Interactive-dashboard backend over the IMDB Top 250 dataset", long_about = None)]
struct Cli {
    /// Path to the IMDB Top 250 CSV file
    #[arg(short, long, default_value = "data/IMDB Top 250 Movies.csv")]
    data_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full cleaned dataset (the data preview panel)
    Preview,

    /// Print the genre treemap specification
    Treemap,

    /// Print the scatter plot specification
    Scatter {
        /// X axis column: box_office or budget
        #[arg(long, default_value = "box_office", value_parser = XAxis::from_str)]
        x_axis: XAxis,
    },

    /// Print the filtered movies table
    Table {
        /// Lower edge of the year range (inclusive)
        #[arg(long, default_value_t = YEAR_DOMAIN_MIN)]
        year_min: Year,

        /// Upper edge of the year range (inclusive)
        #[arg(long, default_value_t = YEAR_DOMAIN_MAX)]
        year_max: Year,

        /// Runtime bucket label, e.g. "2 to 2.5 hours"
        #[arg(long, default_value = "Up to 1.5 hours", value_parser = RuntimeBucket::from_str)]
        runtime: RuntimeBucket,
    },

    /// Render the whole dashboard snapshot (all four outputs)
    Render {
        #[arg(long, default_value = "box_office", value_parser = XAxis::from_str)]
        x_axis: XAxis,

        #[arg(long, default_value_t = YEAR_DOMAIN_MIN)]
        year_min: Year,

        #[arg(long, default_value_t = YEAR_DOMAIN_MAX)]
        year_max: Year,

        #[arg(long, default_value = "Up to 1.5 hours", value_parser = RuntimeBucket::from_str)]
        runtime: RuntimeBucket,
    },

    /// Run benchmark to test render performance
    Benchmark {
        /// Number of renders to perform
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent renders
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the dataset (status goes to stderr; stdout stays JSON)
    eprintln!("Loading dataset from {}...", cli.data_path.display());
    let start = Instant::now();
    let table = Arc::new(
        MovieTable::load_from_csv(&cli.data_path)
            .context("Failed to load the IMDB Top 250 dataset")?,
    );
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        table.len(),
        start.elapsed()
    );

    let orchestrator = DashboardOrchestrator::new(table);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Preview => handle_preview(orchestrator).await?,
        Commands::Treemap => handle_treemap(orchestrator).await?,
        Commands::Scatter { x_axis } => handle_scatter(orchestrator, x_axis).await?,
        Commands::Table {
            year_min,
            year_max,
            runtime,
        } => handle_table(orchestrator, year_min, year_max, runtime).await?,
        Commands::Render {
            x_axis,
            year_min,
            year_max,
            runtime,
        } => handle_render(orchestrator, x_axis, year_min, year_max, runtime).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(orchestrator, requests, concurrent).await?,
    }

    Ok(())
}

fn controls_from(
    x_axis: XAxis,
    year_min: Year,
    year_max: Year,
    runtime: RuntimeBucket,
) -> Controls {
    Controls {
        x_axis,
        year_range: (year_min, year_max),
        runtime_bucket: runtime,
        ..Controls::default()
    }
}

/// Handle the 'preview' command
async fn handle_preview(orchestrator: DashboardOrchestrator) -> Result<()> {
    let snapshot = orchestrator.render(Controls::default()).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot.preview)?);
    Ok(())
}

/// Handle the 'treemap' command
async fn handle_treemap(orchestrator: DashboardOrchestrator) -> Result<()> {
    let snapshot = orchestrator.render(Controls::default()).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot.treemap)?);
    Ok(())
}

/// Handle the 'scatter' command
async fn handle_scatter(orchestrator: DashboardOrchestrator, x_axis: XAxis) -> Result<()> {
    let controls = Controls {
        x_axis,
        ..Controls::default()
    };
    let snapshot = orchestrator.render(controls).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot.scatter)?);
    Ok(())
}

/// Handle the 'table' command
async fn handle_table(
    orchestrator: DashboardOrchestrator,
    year_min: Year,
    year_max: Year,
    runtime: RuntimeBucket,
) -> Result<()> {
    let controls = controls_from(XAxis::default(), year_min, year_max, runtime);
    let snapshot = orchestrator.render(controls).await?;

    eprintln!(
        "{} {} of {} movies match years {}-{} and bucket '{}'",
        "✓".green(),
        snapshot.filtered_table.rows.len(),
        orchestrator.table().len(),
        year_min,
        year_max,
        runtime
    );
    println!("{}", serde_json::to_string_pretty(&snapshot.filtered_table)?);
    Ok(())
}

/// Handle the 'render' command
async fn handle_render(
    orchestrator: DashboardOrchestrator,
    x_axis: XAxis,
    year_min: Year,
    year_max: Year,
    runtime: RuntimeBucket,
) -> Result<()> {
    let controls = controls_from(x_axis, year_min, year_max, runtime);
    let snapshot = orchestrator.render(controls).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: DashboardOrchestrator,
    requests: usize,
    _concurrent: usize,
) -> Result<()> {
    // Each request simulates one sidebar interaction with random controls
    let controls: Vec<Controls> = (0..requests).map(|_| random_controls()).collect();

    // Use tokio::spawn to make concurrent renders
    let mut handles = vec![];
    for c in controls {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.render(c).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all renders to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} renders/second", throughput);

    Ok(())
}

/// One random sidebar state within the fixed control domains
fn random_controls() -> Controls {
    let domain_span = (YEAR_DOMAIN_MAX - YEAR_DOMAIN_MIN + 1) as u32;
    let a = YEAR_DOMAIN_MIN + (rand::random::<u32>() % domain_span) as Year;
    let b = YEAR_DOMAIN_MIN + (rand::random::<u32>() % domain_span) as Year;

    let x_axis = if rand::random::<bool>() {
        XAxis::BoxOffice
    } else {
        XAxis::Budget
    };
    let bucket = RuntimeBucket::ALL[rand::random::<u32>() as usize % RuntimeBucket::ALL.len()];

    Controls {
        x_axis,
        year_range: (a.min(b), a.max(b)),
        runtime_bucket: bucket,
        ..Controls::default()
    }
}
