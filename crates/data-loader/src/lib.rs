//! # Data Loader Crate
//!
//! This crate handles loading and cleaning the IMDB Top 250 dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, CleanedMovie, MovieTable)
//! - **parser**: Parse the CSV file into raw records
//! - **clean**: Coerce currency text to numbers and runtime text to minutes
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieTable;
//! use std::path::Path;
//!
//! // Load and clean the entire dataset
//! let table = MovieTable::load_from_csv(Path::new("data/IMDB Top 250 Movies.csv"))?;
//!
//! for movie in table.movies() {
//!     println!("{} ({}): {} min", movie.name, movie.year, movie.run_time_minutes);
//! }
//! ```
//!
//! The table is immutable after loading: each dashboard interaction re-runs
//! the view builders over the same loaded data, and derived fields
//! (`budget`, `box_office`, `run_time_minutes`) are computed exactly once
//! per load as pure functions of the source cells.

// Public modules
pub mod clean;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use clean::{parse_currency, parse_runtime_minutes};
pub use error::{DataLoadError, Result};
pub use types::{CleanedMovie, MovieRecord, MovieTable, Year};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_csv(contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "imdb-loader-test-{}-{:?}.csv",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_and_clean_end_to_end() {
        let path = write_temp_csv(concat!(
            "rank,name,year,rating,genre,certificate,run_time,budget,box_office\n",
            "1,X,1999,8.5,\"Drama,Crime\",R,2h 15m,\"$5,000,000\",\"$12,500,000\"\n",
            "2,Y,1950,8.1,Drama,PG,Not Available,Not Available,Not Available\n",
        ));

        let table = MovieTable::load_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.len(), 2);

        let x = &table.movies()[0];
        assert_eq!(x.name, "X");
        assert_eq!(x.budget, Some(5_000_000.0));
        assert_eq!(x.box_office, Some(12_500_000.0));
        assert_eq!(x.run_time_minutes, 135);

        let y = &table.movies()[1];
        assert_eq!(y.budget, None);
        assert_eq!(y.box_office, None);
        assert_eq!(y.run_time_minutes, 0);
    }

    #[test]
    fn test_load_is_deterministic() {
        let contents = concat!(
            "rank,name,year,rating,genre,certificate,run_time,budget,box_office\n",
            "1,X,1999,8.5,Drama,R,1h 30m,\"$1,000\",\"$2,000\"\n",
        );
        let path = write_temp_csv(contents);

        let first = MovieTable::load_from_csv(&path).unwrap();
        let second = MovieTable::load_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(first, second);
    }
}
