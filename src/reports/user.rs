//! Bikeshare user statistics.
//!
//! Gender and birth-year columns are only read when the table's schema descriptor lists them,
//! so cities without demographics (Washington) never touch those columns.

use std::fmt;

use crate::config::OptionalField;
use crate::error::BikeshareResult;
use crate::processing::{mode, reduce, value_counts, ReduceOp};
use crate::trips::{TripTable, BIRTH_YEAR, GENDER, USER_TYPE};
use crate::types::Value;

use super::ensure_rows;

/// A demographic statistic that only some cities collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographic<T> {
    NotCollected,
    Collected(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub latest: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Count per user type, most frequent first.
    pub user_types: Vec<(String, usize)>,
    pub genders: Demographic<Vec<(String, usize)>>,
    /// `Collected(None)` when every selected trip lacks a birth year.
    pub birth_years: Demographic<Option<BirthYears>>,
}

pub fn user_stats(table: &TripTable) -> BikeshareResult<UserStats> {
    ensure_rows(table, "user stats")?;
    let data = &table.data;

    let counts = |column: &str| -> Vec<(String, usize)> {
        value_counts(data, column)
            .unwrap_or_default()
            .into_iter()
            .map(|(v, n)| (v.to_string(), n))
            .collect()
    };

    let genders = if table.has(OptionalField::Gender) {
        Demographic::Collected(counts(GENDER))
    } else {
        Demographic::NotCollected
    };

    let birth_years = if table.has(OptionalField::BirthYear) {
        let year = |op| reduce(data, BIRTH_YEAR, op).and_then(|v| as_year(&v));
        let years = match (
            year(ReduceOp::Min),
            year(ReduceOp::Max),
            mode(data, BIRTH_YEAR).and_then(|v| as_year(&v)),
        ) {
            (Some(earliest), Some(latest), Some(most_common)) => Some(BirthYears {
                earliest,
                latest,
                most_common,
            }),
            _ => None,
        };
        Demographic::Collected(years)
    } else {
        Demographic::NotCollected
    };

    Ok(UserStats {
        user_types: counts(USER_TYPE),
        genders,
        birth_years,
    })
}

fn as_year(v: &Value) -> Option<i64> {
    v.as_f64().filter(|y| y.is_finite()).map(|y| y.trunc() as i64)
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    let width = counts.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, n) in counts {
        writeln!(f, "{key:<width$}    {n}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here are the counts of the different user types.")?;
        write_counts(f, &self.user_types)?;

        match &self.genders {
            Demographic::Collected(genders) => {
                writeln!(f, "Here are the counts of the different genders.")?;
                write_counts(f, genders)?;
            }
            Demographic::NotCollected => writeln!(f, "Gender data is not available for this city.")?,
        }

        match &self.birth_years {
            Demographic::Collected(Some(years)) => {
                writeln!(f, "Here is the earliest year of birth.")?;
                writeln!(f, "{}", years.earliest)?;
                writeln!(f, "Here is the latest year of birth.")?;
                writeln!(f, "{}", years.latest)?;
                writeln!(f, "Here is the most common year of birth.")?;
                write!(f, "{}", years.most_common)
            }
            Demographic::Collected(None) => write!(f, "No birth year data in the selected trips."),
            Demographic::NotCollected => write!(f, "Birth year data is not available for this city."),
        }
    }
}
