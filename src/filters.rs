//! Month/day filter criteria chosen at the prompt.

use std::fmt;

use chrono::Weekday;

use crate::config::City;

/// Months covered by the datasets, in calendar order.
pub const MONTHS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

/// Weekdays in the order they are offered at the prompt.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Restriction on the start month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Calendar month number, 1 (January) through 6 (June).
    Month(u32),
}

impl MonthFilter {
    /// Parse `all` or a month name from January to June (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Some(Self::All);
        }
        MONTHS
            .iter()
            .position(|m| m.to_lowercase() == input)
            .map(|i| Self::Month(i as u32 + 1))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Month(n) => f.write_str(month_name(*n).unwrap_or("Unknown")),
        }
    }
}

/// Title-case name of calendar month `n` if it is one the datasets cover.
pub fn month_name(n: u32) -> Option<&'static str> {
    MONTHS.get((n as usize).checked_sub(1)?).copied()
}

/// Restriction on the start weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Parse `all` or a full weekday name (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Some(Self::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == input)
            .map(Self::Day)
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// Title-case weekday name, as stored in the derived `day_of_week` column.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One session iteration's selection. Never changes once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// No month or day restriction.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city, self.month, self.day)
    }
}
