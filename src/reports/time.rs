//! Most frequent times of travel.

use std::fmt;

use crate::error::BikeshareResult;
use crate::filters::{month_name, DayFilter, FilterCriteria, MonthFilter};
use crate::processing::mode;
use crate::trips::{TripTable, DAY_OF_WEEK, HOUR, MONTH};
use crate::types::Value;

use super::ensure_rows;

/// A month or weekday line: either computed from the data or fixed by the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodStat {
    MostCommon(String),
    FilteredBy(String),
}

/// AM/PM suffix of a [`ClockHour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Start hour in 12-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHour {
    pub hour: u32,
    pub meridiem: Meridiem,
}

impl ClockHour {
    /// Hours above 12 become `hour - 12` PM; every other hour is shown unchanged as AM.
    ///
    /// Midnight therefore reads "0 o'clock AM" and noon reads "12 o'clock AM".
    pub fn from_hour24(hour: u32) -> Self {
        if hour > 12 {
            Self {
                hour: hour - 12,
                meridiem: Meridiem::Pm,
            }
        } else {
            Self {
                hour,
                meridiem: Meridiem::Am,
            }
        }
    }
}

impl fmt::Display for ClockHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.meridiem {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        };
        write!(f, "{} o'clock {label}", self.hour)
    }
}

/// Most frequent month, weekday and start hour of the selected trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: PeriodStat,
    pub day: PeriodStat,
    pub start_hour: ClockHour,
}

/// Most common month (unless filtered), weekday (unless filtered) and start hour.
pub fn time_stats(table: &TripTable, criteria: &FilterCriteria) -> BikeshareResult<TimeStats> {
    ensure_rows(table, "time stats")?;
    let data = &table.data;

    let month = match criteria.month {
        MonthFilter::All => PeriodStat::MostCommon(match mode(data, MONTH) {
            Some(Value::Int64(m)) => u32::try_from(m)
                .ok()
                .and_then(month_name)
                .map_or_else(|| m.to_string(), str::to_string),
            _ => "unknown".to_string(),
        }),
        MonthFilter::Month(_) => PeriodStat::FilteredBy(criteria.month.to_string()),
    };

    let day = match criteria.day {
        DayFilter::All => PeriodStat::MostCommon(match mode(data, DAY_OF_WEEK) {
            Some(Value::Utf8(d)) => d,
            _ => "unknown".to_string(),
        }),
        DayFilter::Day(_) => PeriodStat::FilteredBy(criteria.day.to_string()),
    };

    let hour = match mode(data, HOUR) {
        Some(Value::Int64(h)) => u32::try_from(h).unwrap_or(0),
        _ => 0,
    };

    Ok(TimeStats {
        month,
        day,
        start_hour: ClockHour::from_hour24(hour),
    })
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.month {
            PeriodStat::MostCommon(m) => writeln!(f, "The most common month to travel is {m}.")?,
            PeriodStat::FilteredBy(m) => writeln!(f, "The selected data is filtered by {m}.")?,
        }
        match &self.day {
            PeriodStat::MostCommon(d) => writeln!(f, "The most common day of the week to travel is {d}.")?,
            PeriodStat::FilteredBy(d) => writeln!(f, "The selected data is filtered by {d}.")?,
        }
        write!(f, "The most common start hour is {}.", self.start_hour)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::{time_stats, ClockHour, Meridiem, PeriodStat};
    use crate::config::City;
    use crate::filters::{DayFilter, FilterCriteria, MonthFilter};
    use crate::reports::fixtures::{table, trip};
    use crate::BikeshareError;

    #[test]
    fn clock_hour_keeps_the_am_pm_rule() {
        assert_eq!(ClockHour::from_hour24(0), ClockHour { hour: 0, meridiem: Meridiem::Am });
        assert_eq!(ClockHour::from_hour24(9), ClockHour { hour: 9, meridiem: Meridiem::Am });
        assert_eq!(ClockHour::from_hour24(12), ClockHour { hour: 12, meridiem: Meridiem::Am });
        assert_eq!(ClockHour::from_hour24(13), ClockHour { hour: 1, meridiem: Meridiem::Pm });
        assert_eq!(ClockHour::from_hour24(23).to_string(), "11 o'clock PM");
    }

    #[test]
    fn unfiltered_reports_modes_with_first_seen_tie_break() {
        let t = table(
            City::Chicago,
            &[
                trip("2017-03-05 17:10:00", 60.0, "A", "B"), // Sunday
                trip("2017-01-02 08:00:00", 60.0, "A", "B"), // Monday
                trip("2017-03-06 17:45:00", 60.0, "A", "B"), // Monday
                trip("2017-01-08 08:30:00", 60.0, "A", "B"), // Sunday
            ],
        );
        let stats = time_stats(&t, &FilterCriteria::unfiltered(City::Chicago)).unwrap();

        // March and January tie at two trips each; March is seen first.
        assert_eq!(stats.month, PeriodStat::MostCommon("March".to_string()));
        assert_eq!(stats.day, PeriodStat::MostCommon("Sunday".to_string()));
        assert_eq!(stats.start_hour, ClockHour { hour: 5, meridiem: Meridiem::Pm });

        let text = stats.to_string();
        assert!(text.contains("The most common month to travel is March."));
        assert!(text.contains("The most common day of the week to travel is Sunday."));
        assert!(text.ends_with("The most common start hour is 5 o'clock PM."));
    }

    #[test]
    fn active_filters_are_echoed_instead_of_computed() {
        let t = table(City::Washington, &[trip("2017-02-06 12:05:00", 60.0, "A", "B")]);
        let criteria = FilterCriteria::new(
            City::Washington,
            MonthFilter::Month(2),
            DayFilter::Day(Weekday::Mon),
        );
        let stats = time_stats(&t, &criteria).unwrap();
        assert_eq!(stats.month, PeriodStat::FilteredBy("February".to_string()));
        assert_eq!(stats.day, PeriodStat::FilteredBy("Monday".to_string()));
        assert_eq!(stats.start_hour.to_string(), "12 o'clock AM");
    }

    #[test]
    fn empty_table_is_an_error_not_a_panic() {
        let t = table(City::Chicago, &[]);
        let err = time_stats(&t, &FilterCriteria::unfiltered(City::Chicago)).unwrap_err();
        assert!(matches!(err, BikeshareError::EmptyDataset { report: "time stats" }));
    }
}
