//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Each report is a pure function from the table to a typed result whose [`std::fmt::Display`]
//! impl is the text shown to the user:
//!
//! - [`time_stats`]: most common month, weekday and start hour
//! - [`station_stats`]: most common start station, end station and trip
//! - [`duration_stats`]: total and mean trip duration
//! - [`user_stats`]: user type counts and, where the city records them, gender and birth years
//!
//! Reports never modify the table. All of them return [`BikeshareError::EmptyDataset`] for a
//! table without rows.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::error::{BikeshareError, BikeshareResult};
use crate::filters::FilterCriteria;
use crate::trips::TripTable;

pub use duration::{duration_stats, DurationStats, HoursMinutesSeconds, MinutesSeconds};
pub use station::{station_stats, StationStats};
pub use time::{time_stats, ClockHour, Meridiem, PeriodStat, TimeStats};
pub use user::{user_stats, BirthYears, Demographic, UserStats};

/// The four reports, in the order the session runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Time,
    Station,
    Duration,
    User,
}

impl ReportKind {
    /// Every report, in run order.
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Time,
        ReportKind::Station,
        ReportKind::Duration,
        ReportKind::User,
    ];

    /// Status line printed before the report runs.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Time => "Calculating The Most Frequent Times of Travel...",
            Self::Station => "Calculating The Most Popular Stations and Trip...",
            Self::Duration => "Calculating Trip Duration...",
            Self::User => "Calculating User Stats...",
        }
    }

    /// Compute the report and render it as text.
    pub fn render(self, table: &TripTable, criteria: &FilterCriteria) -> BikeshareResult<String> {
        Ok(match self {
            Self::Time => time_stats(table, criteria)?.to_string(),
            Self::Station => station_stats(table)?.to_string(),
            Self::Duration => duration_stats(table)?.to_string(),
            Self::User => user_stats(table)?.to_string(),
        })
    }
}

pub(crate) fn ensure_rows(table: &TripTable, report: &'static str) -> BikeshareResult<()> {
    if table.is_empty() {
        return Err(BikeshareError::EmptyDataset { report });
    }
    Ok(())
}
