//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//! It is purely in-memory and single-threaded.
//!
//! - [`filter()`]: row filtering by predicate
//! - [`reduce()`]: common reductions (count/sum/min/max/mean)
//! - [`mode()`] and [`value_counts()`]: frequency statistics with first-seen tie-breaking
//!
//! ## Example: filter → reduce → mode
//!
//! ```rust
//! use bikeshare_stats::processing::{column_equals, filter, mode, reduce, ReduceOp};
//! use bikeshare_stats::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("Start Station", DataType::Utf8),
//!     Field::new("month", DataType::Int64),
//!     Field::new("Trip Duration", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("Canal St".into()), Value::Int64(1), Value::Float64(300.0)],
//!         vec![Value::Utf8("Clark St".into()), Value::Int64(2), Value::Float64(900.0)],
//!         vec![Value::Utf8("Canal St".into()), Value::Int64(1), Value::Float64(60.0)],
//!     ],
//! );
//!
//! // Keep only January trips.
//! let month_idx = ds.schema.index_of("month").unwrap();
//! let january = filter(&ds, column_equals(month_idx, Value::Int64(1)));
//!
//! let total = reduce(&january, "Trip Duration", ReduceOp::Sum).unwrap();
//! assert_eq!(total, Value::Float64(360.0));
//! assert_eq!(mode(&january, "Start Station"), Some(Value::Utf8("Canal St".into())));
//! ```

pub mod filter;
pub mod frequency;
pub mod reduce;

pub use filter::{column_equals, filter};
pub use frequency::{mode, mode_of, value_counts};
pub use reduce::{reduce, ReduceOp};
