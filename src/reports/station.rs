//! Most popular stations and trip.

use std::fmt;

use crate::error::BikeshareResult;
use crate::processing::{mode, mode_of};
use crate::trips::{TripTable, END_STATION, START_STATION};
use crate::types::Value;

use super::ensure_rows;

/// Joins start and end station names into one trip label.
pub const TRIP_SEPARATOR: &str = " to ";

/// Most common start station, end station and start-to-end trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// `"<start> to <end>"`.
    pub trip: String,
}

pub fn station_stats(table: &TripTable) -> BikeshareResult<StationStats> {
    ensure_rows(table, "station stats")?;
    let data = &table.data;

    let trips: Vec<Value> = match (data.schema.index_of(START_STATION), data.schema.index_of(END_STATION)) {
        (Some(s), Some(e)) => data
            .rows
            .iter()
            .map(|row| match (row.get(s), row.get(e)) {
                (Some(Value::Utf8(from)), Some(Value::Utf8(to))) => {
                    Value::Utf8(format!("{from}{TRIP_SEPARATOR}{to}"))
                }
                _ => Value::Null,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(StationStats {
        start_station: text_mode(mode(data, START_STATION)),
        end_station: text_mode(mode(data, END_STATION)),
        trip: text_mode(Some(mode_of(&trips))),
    })
}

fn text_mode(v: Option<Value>) -> String {
    match v {
        Some(Value::Utf8(s)) => s,
        _ => "unknown".to_string(),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The most commonly used start station is {}.", self.start_station)?;
        writeln!(f, "The most commonly used end station is {}.", self.end_station)?;
        write!(f, "The most commonly used trip combination is {}.", self.trip)
    }
}

#[cfg(test)]
mod tests {
    use super::station_stats;
    use crate::config::City;
    use crate::reports::fixtures::{table, trip};
    use crate::BikeshareError;

    #[test]
    fn pair_mode_can_differ_from_station_modes() {
        let t = table(
            City::NewYorkCity,
            &[
                trip("2017-01-02 08:00:00", 60.0, "Pier 40", "W 4 St"),
                trip("2017-01-02 09:00:00", 60.0, "Pier 40", "Grand Army Plaza"),
                trip("2017-01-02 10:00:00", 60.0, "E 17 St", "Grand Army Plaza"),
                trip("2017-01-02 11:00:00", 60.0, "E 17 St", "Grand Army Plaza"),
                trip("2017-01-02 12:00:00", 60.0, "Pier 40", "W 4 St"),
                trip("2017-01-02 13:00:00", 60.0, "Pier 40", "Broadway"),
            ],
        );
        let stats = station_stats(&t).unwrap();
        assert_eq!(stats.start_station, "Pier 40");
        assert_eq!(stats.end_station, "Grand Army Plaza");
        // "Pier 40 to W 4 St" and "E 17 St to Grand Army Plaza" tie; the former is seen first.
        assert_eq!(stats.trip, "Pier 40 to W 4 St");
        assert!(stats
            .to_string()
            .contains("The most commonly used trip combination is Pier 40 to W 4 St."));
    }

    #[test]
    fn table_is_not_modified() {
        let t = table(City::Chicago, &[trip("2017-01-02 08:00:00", 60.0, "A", "B")]);
        let before = t.clone();
        station_stats(&t).unwrap();
        assert_eq!(t, before);
    }

    #[test]
    fn empty_table_is_an_error() {
        let err = station_stats(&table(City::Washington, &[])).unwrap_err();
        assert!(matches!(err, BikeshareError::EmptyDataset { .. }));
    }
}
