//! Parser for the IMDB Top 250 CSV file.
//!
//! The file is a regular comma-separated table with a header row. Columns
//! are resolved by header name, not position, so reordered exports still
//! load. Columns the pipeline does not interpret are passed through
//! unmodified into [`MovieRecord::extras`].

use crate::error::{DataLoadError, Result};
use crate::types::MovieRecord;
use csv::StringRecord;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Column indices resolved from the header row.
///
/// Every field the pipeline reads must be present; anything else lands in
/// `extras` with its header name.
struct ColumnMap {
    name: usize,
    year: usize,
    genre: usize,
    rating: usize,
    budget: usize,
    box_office: usize,
    run_time: usize,
    /// (header name, column index) for pass-through columns
    extras: Vec<(String, usize)>,
}

impl ColumnMap {
    const REQUIRED: [&'static str; 7] = [
        "name",
        "year",
        "genre",
        "rating",
        "budget",
        "box_office",
        "run_time",
    ];

    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        let extras = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !Self::REQUIRED.iter().any(|r| r == h))
            .map(|(idx, h)| (h.to_string(), idx))
            .collect();

        Ok(Self {
            name: find("name")?,
            year: find("year")?,
            genre: find("genre")?,
            rating: find("rating")?,
            budget: find("budget")?,
            box_office: find("box_office")?,
            run_time: find("run_time")?,
            extras,
        })
    }
}

/// Parse the dataset file into raw movie records.
///
/// Fails on an unreadable file, a missing required column, or a malformed
/// `year`/`rating` cell. Free-text cells (budget, box_office, run_time) are
/// kept verbatim; coercion happens later in the cleaner.
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut movies = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header row
        let line_no = idx + 2;
        let record = result?;
        movies.push(parse_record(&record, &columns, line_no)?);
    }

    Ok(movies)
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnMap,
    line_no: usize,
) -> Result<MovieRecord> {
    let field = |idx: usize, name: &str| -> Result<&str> {
        record.get(idx).ok_or_else(|| DataLoadError::ParseError {
            line: line_no,
            reason: format!("Missing {} field", name),
        })
    };

    let year = field(columns.year, "year")?;
    let rating = field(columns.rating, "rating")?;

    let mut extras = BTreeMap::new();
    for (header, idx) in &columns.extras {
        extras.insert(header.clone(), field(*idx, header)?.to_string());
    }

    Ok(MovieRecord {
        name: field(columns.name, "name")?.to_string(),
        year: year.trim().parse().map_err(|e| DataLoadError::ParseError {
            line: line_no,
            reason: format!("Invalid year: {}", e),
        })?,
        genre: field(columns.genre, "genre")?.to_string(),
        rating: rating
            .trim()
            .parse()
            .map_err(|e| DataLoadError::ParseError {
                line: line_no,
                reason: format!("Invalid rating: {}", e),
            })?,
        budget: field(columns.budget, "budget")?.to_string(),
        box_office: field(columns.box_office, "box_office")?.to_string(),
        run_time: field(columns.run_time, "run_time")?.to_string(),
        extras,
    })
}
