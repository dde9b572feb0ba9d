//! Integration tests for the pipeline.
//!
//! These tests verify that cleaning, genre expansion and the view builders
//! work together in a realistic scenario.

use data_loader::{CleanedMovie, MovieRecord, MovieTable, clean};
use pipeline::{
    Controls, DataPreview, FilteredTable, RuntimeBucket, ScatterSpec, TreemapSpec, XAxis, YAxis,
    expand_genres,
};
use std::collections::BTreeMap;

fn raw(name: &str, year: u16, genre: &str, budget: &str, box_office: &str, run_time: &str) -> MovieRecord {
    MovieRecord {
        name: name.to_string(),
        year,
        genre: genre.to_string(),
        rating: 8.5,
        budget: budget.to_string(),
        box_office: box_office.to_string(),
        run_time: run_time.to_string(),
        extras: BTreeMap::new(),
    }
}

fn create_test_table() -> MovieTable {
    let records = vec![
        raw(
            "X",
            1999,
            "Drama,Crime",
            "$5,000,000",
            "$12,500,000",
            "2h 15m",
        ),
        raw("Shorts", 1950, "Comedy", "Not Available", "$900,000", "45m"),
        raw(
            "Epic",
            2010,
            "Action,Adventure,Sci-Fi",
            "$200,000,000",
            "$800,000,000",
            "3h 10m",
        ),
        raw("Lost Cut", 1930, "Drama", "", "", "Not Available"),
    ];

    MovieTable::from_movies(clean::clean_records(records).unwrap())
}

#[test]
fn test_cleaning_derives_all_columns() {
    let table = create_test_table();
    let movies: Vec<&CleanedMovie> = table.movies().iter().collect();

    assert_eq!(movies[0].budget, Some(5_000_000.0));
    assert_eq!(movies[0].box_office, Some(12_500_000.0));
    assert_eq!(movies[0].run_time_minutes, 135);

    assert_eq!(movies[1].budget, None);
    assert_eq!(movies[1].run_time_minutes, 45);

    assert_eq!(movies[2].run_time_minutes, 190);

    // No markers at all: coerced to the zero sentinel, not an error
    assert_eq!(movies[3].budget, None);
    assert_eq!(movies[3].box_office, None);
    assert_eq!(movies[3].run_time_minutes, 0);
}

#[test]
fn test_full_pipeline_end_to_end() {
    let table = create_test_table();

    // Treemap over the expanded, unfiltered entries
    let entries = expand_genres(&table);
    assert_eq!(entries.len(), 2 + 1 + 3 + 1);
    let treemap = TreemapSpec::build(&entries);
    assert_eq!(treemap.leaves.len(), entries.len());
    assert!(
        treemap
            .leaves
            .iter()
            .filter(|l| l.name == "X")
            .map(|l| l.genre.as_str())
            .eq(["Drama", "Crime"])
    );

    // Scatter over the non-expanded table: one point per movie
    let scatter = ScatterSpec::build(&table, XAxis::BoxOffice, YAxis::Rating);
    assert_eq!(scatter.points.len(), table.len());
    assert_eq!(scatter.points[3].x, None);

    // Filtered table: year in [1990, 2000] AND runtime in [120, 150)
    let controls = Controls {
        year_range: (1990, 2000),
        runtime_bucket: RuntimeBucket::From120To150,
        ..Controls::default()
    };
    let filtered = FilteredTable::build(&table, &controls);
    assert_eq!(filtered.rows.len(), 1);
    assert_eq!(filtered.rows[0].name, "X");

    // Preview is always the full cleaned dataset
    let preview = DataPreview::build(&table);
    assert_eq!(preview.rows.len(), table.len());
}

#[test]
fn test_zero_runtime_rows_only_reachable_via_first_bucket() {
    let table = create_test_table();

    let mut buckets_containing_lost_cut = Vec::new();
    for bucket in RuntimeBucket::ALL {
        let controls = Controls {
            runtime_bucket: bucket,
            ..Controls::default()
        };
        let filtered = FilteredTable::build(&table, &controls);
        if filtered.rows.iter().any(|m| m.name == "Lost Cut") {
            buckets_containing_lost_cut.push(bucket);
        }
    }

    assert_eq!(buckets_containing_lost_cut, vec![RuntimeBucket::UpTo90]);
}

#[test]
fn test_rerun_with_same_controls_is_identical() {
    let table = create_test_table();
    let controls = Controls {
        x_axis: XAxis::Budget,
        year_range: (1940, 2015),
        runtime_bucket: RuntimeBucket::Over180,
        ..Controls::default()
    };

    let run = |table: &MovieTable| {
        (
            TreemapSpec::build(&expand_genres(table)),
            ScatterSpec::build(table, controls.x_axis, controls.y_axis),
            FilteredTable::build(table, &controls),
        )
    };

    assert_eq!(run(&table), run(&table));
}
