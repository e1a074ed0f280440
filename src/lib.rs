//! `bikeshare-stats` explores US bike-share trip data for Chicago, New York City and Washington.
//!
//! A session asks for a city and optional month/day filters, loads that city's CSV into an
//! in-memory [`types::DataSet`], and prints four reports over the filtered trips before
//! offering the raw rows five at a time.
//!
//! ## Loading and reporting without the prompt
//!
//! ```no_run
//! use bikeshare_stats::config::{City, DatasetConfig};
//! use bikeshare_stats::filters::{DayFilter, FilterCriteria, MonthFilter};
//! use bikeshare_stats::ingestion::IngestionOptions;
//! use bikeshare_stats::{reports, trips};
//!
//! # fn main() -> Result<(), bikeshare_stats::BikeshareError> {
//! let config = DatasetConfig::default();
//! let criteria = FilterCriteria::new(City::Chicago, MonthFilter::Month(3), DayFilter::All);
//!
//! let table = trips::load(&config, &criteria, &IngestionOptions::default())?;
//! if !table.is_empty() {
//!     println!("{}", reports::station_stats(&table)?);
//!     println!("{}", reports::duration_stats(&table)?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: city → file mapping and per-city schema descriptors
//! - [`filters`]: month/day filter criteria
//! - [`ingestion`]: CSV ingestion with observer hooks
//! - [`trips`]: the trip table loader (calendar columns + filtering)
//! - [`processing`]: in-memory filter/reduce/mode primitives
//! - [`reports`]: time, station, duration and user statistics
//! - [`paginate`]: the raw data viewer
//! - [`session`]: the interactive loop
//! - [`error`]: the crate error type

pub mod config;
pub mod console;
pub mod error;
pub mod filters;
pub mod ingestion;
pub mod paginate;
pub mod processing;
pub mod reports;
pub mod session;
pub mod trips;
pub mod types;

pub use error::{BikeshareError, BikeshareResult};
