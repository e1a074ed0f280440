//! Total and mean trip duration.

use std::fmt;

use crate::error::BikeshareResult;
use crate::processing::{reduce, ReduceOp};
use crate::trips::{TripTable, TRIP_DURATION};
use crate::types::Value;

use super::ensure_rows;

/// A duration split into hours, minutes (< 60) and seconds (< 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursMinutesSeconds {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl HoursMinutesSeconds {
    /// Split whole seconds by repeated divmod 60.
    pub fn from_seconds(total: u64) -> Self {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// Minutes are not capped at 59; a long mean shows as e.g. `75 minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinutesSeconds {
    pub minutes: u64,
    pub seconds: u64,
}

impl MinutesSeconds {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }
}

/// Total and mean travel time of the selected trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub total: HoursMinutesSeconds,
    pub mean: MinutesSeconds,
}

pub fn duration_stats(table: &TripTable) -> BikeshareResult<DurationStats> {
    ensure_rows(table, "trip duration stats")?;

    let total = reduce(&table.data, TRIP_DURATION, ReduceOp::Sum);
    let mean = reduce(&table.data, TRIP_DURATION, ReduceOp::Mean);

    Ok(DurationStats {
        total: HoursMinutesSeconds::from_seconds(whole_seconds(total)),
        mean: MinutesSeconds::from_seconds(whole_seconds(mean)),
    })
}

/// Truncates toward zero; nulls and negative values count as zero.
fn whole_seconds(v: Option<Value>) -> u64 {
    v.and_then(|v| v.as_f64())
        .filter(|s| s.is_finite() && *s > 0.0)
        .map_or(0, |s| s.trunc() as u64)
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let HoursMinutesSeconds {
            hours,
            minutes,
            seconds,
        } = self.total;
        writeln!(
            f,
            "The total travel time is {hours} hours, {minutes} minutes, and {seconds} seconds."
        )?;
        write!(
            f,
            "The average trip time is {} minutes, and {} seconds.",
            self.mean.minutes, self.mean.seconds
        )
    }
}
