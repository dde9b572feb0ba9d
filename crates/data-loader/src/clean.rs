//! Cleaning pass: coerce currency text to numbers and runtime text to minutes.
//!
//! Cleaning is lenient where the source data is sloppy on purpose:
//! - currency cells that don't parse become the missing sentinel (`None`)
//! - runtime cells with no `h`/`m` marker at all become `0` minutes
//!
//! It is strict where the cell claims a format: a runtime that carries an
//! `h` or `m` marker but a non-numeric component aborts the load. That row
//! asserted a duration and lied about it, which is a dataset defect rather
//! than a missing value.

use crate::error::{DataLoadError, Result};
use crate::types::{CleanedMovie, MovieRecord};
use rayon::prelude::*;

/// Coerce a currency-formatted cell ("$25,000,000") to a number.
///
/// Strips `$` and `,`, then parses the rest as a decimal. Anything that
/// still doesn't parse (empty, "Not Available", stray text) yields `None`.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let stripped: String = raw.chars().filter(|&c| c != '$' && c != ',').collect();
    stripped.trim().parse::<f64>().ok()
}

/// Normalize a free-text runtime ("2h 15m", "45m", "Not Available") to minutes.
///
/// - text containing `h`: integer before `h` is hours; an integer between
///   `h` and a following `m` is minutes; result = hours*60 + minutes
/// - text containing only `m`: integer before `m` is the result
/// - no marker at all: `0` minutes
///
/// A marked-but-non-numeric component (e.g. "?h 10m") is a fatal
/// [`DataLoadError::InvalidValue`] for the row.
pub fn parse_runtime_minutes(raw: &str) -> Result<u32> {
    let invalid = || DataLoadError::InvalidValue {
        field: "run_time".to_string(),
        value: raw.to_string(),
    };

    let text = raw.trim();
    if let Some(h_pos) = text.find('h') {
        let hours: u32 = text[..h_pos].trim().parse().map_err(|_| invalid())?;
        let rest = &text[h_pos + 1..];
        let minutes: u32 = match rest.find('m') {
            Some(m_pos) => rest[..m_pos].trim().parse().map_err(|_| invalid())?,
            None => 0,
        };
        Ok(hours * 60 + minutes)
    } else if let Some(m_pos) = text.find('m') {
        text[..m_pos].trim().parse().map_err(|_| invalid())
    } else {
        Ok(0)
    }
}

/// Clean one raw record into its derived form
fn clean_record(record: MovieRecord) -> Result<CleanedMovie> {
    let run_time_minutes = parse_runtime_minutes(&record.run_time)?;
    Ok(CleanedMovie {
        name: record.name,
        year: record.year,
        genre: record.genre,
        rating: record.rating,
        budget: parse_currency(&record.budget),
        box_office: parse_currency(&record.box_office),
        run_time: record.run_time,
        run_time_minutes,
        extras: record.extras,
    })
}

/// Clean all records, in parallel, preserving row order.
///
/// The first malformed marked runtime aborts the whole load.
pub fn clean_records(records: Vec<MovieRecord>) -> Result<Vec<CleanedMovie>> {
    records.into_par_iter().map(clean_record).collect()
}
