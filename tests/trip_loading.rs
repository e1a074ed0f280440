use std::path::PathBuf;

use bikeshare_stats::config::{City, CitySource, DatasetConfig, OptionalField};
use bikeshare_stats::filters::{DayFilter, FilterCriteria, MonthFilter, WEEKDAYS};
use bikeshare_stats::ingestion::IngestionOptions;
use bikeshare_stats::trips::{self, TripTable, DAY_OF_WEEK, MONTH, START_TIME};
use bikeshare_stats::types::Value;
use bikeshare_stats::BikeshareError;

fn fixtures() -> DatasetConfig {
    DatasetConfig {
        data_dir: PathBuf::from("tests/fixtures"),
        ..Default::default()
    }
}

fn load(city: City, month: MonthFilter, day: DayFilter) -> TripTable {
    trips::load(
        &fixtures(),
        &FilterCriteria::new(city, month, day),
        &IngestionOptions::default(),
    )
    .unwrap()
}

fn start_times(table: &TripTable) -> Vec<Value> {
    let idx = table.data.schema.index_of(START_TIME).unwrap();
    table.data.column(idx).cloned().collect()
}

#[test]
fn unfiltered_load_returns_every_source_row() {
    assert_eq!(load(City::Chicago, MonthFilter::All, DayFilter::All).row_count(), 12);
    assert_eq!(load(City::NewYorkCity, MonthFilter::All, DayFilter::All).row_count(), 3);
    assert_eq!(load(City::Washington, MonthFilter::All, DayFilter::All).row_count(), 4);
}

#[test]
fn every_filter_combination_keeps_only_matching_rows_in_source_order() {
    let all = start_times(&load(City::Chicago, MonthFilter::All, DayFilter::All));

    let months = std::iter::once(MonthFilter::All).chain((1..=6).map(MonthFilter::Month));
    for month in months {
        let days = std::iter::once(DayFilter::All).chain(WEEKDAYS.into_iter().map(DayFilter::Day));
        for day in days {
            let table = load(City::Chicago, month, day);
            let schema = &table.data.schema;
            let (m, d) = (schema.index_of(MONTH).unwrap(), schema.index_of(DAY_OF_WEEK).unwrap());

            for row in &table.data.rows {
                if let MonthFilter::Month(n) = month {
                    assert_eq!(row[m], Value::Int64(i64::from(n)));
                }
                if let DayFilter::Day(_) = day {
                    assert_eq!(row[d], Value::Utf8(day.to_string()));
                }
            }

            // Subsequence of the unfiltered table.
            let kept = start_times(&table);
            let mut source = all.iter();
            assert!(kept.iter().all(|v| source.any(|s| s == v)), "{month} {day}");
        }
    }
}

#[test]
fn month_counts_partition_the_table() {
    let total: usize = (1..=6)
        .map(|m| load(City::Chicago, MonthFilter::Month(m), DayFilter::All).row_count())
        .sum();
    assert_eq!(total, 12);
    assert_eq!(load(City::Chicago, MonthFilter::Month(1), DayFilter::All).row_count(), 3);
    assert_eq!(
        load(City::Chicago, MonthFilter::Month(1), DayFilter::parse("monday").unwrap()).row_count(),
        2
    );
}

#[test]
fn empty_result_is_not_an_error() {
    let table = load(City::Chicago, MonthFilter::Month(2), DayFilter::parse("Sunday").unwrap());
    assert!(table.is_empty());
}

#[test]
fn washington_table_has_no_demographic_columns() {
    let table = load(City::Washington, MonthFilter::All, DayFilter::All);
    assert!(!table.has(OptionalField::Gender));
    assert_eq!(table.data.schema.index_of("Gender"), None);
    assert_eq!(table.data.schema.index_of("Birth Year"), None);
}

#[test]
fn leading_index_column_is_ignored() {
    let table = load(City::NewYorkCity, MonthFilter::All, DayFilter::All);
    assert_eq!(table.data.schema.index_of(""), None);
    assert!(table.has(OptionalField::BirthYear));
}

#[test]
fn missing_file_is_data_source_not_found() {
    let config = DatasetConfig {
        data_dir: PathBuf::from("tests/no_such_dir"),
        ..Default::default()
    };
    let err = trips::load(
        &config,
        &FilterCriteria::unfiltered(City::Washington),
        &IngestionOptions::default(),
    )
    .unwrap_err();
    match err {
        BikeshareError::DataSourceNotFound { city, path, .. } => {
            assert_eq!(city, "washington");
            assert_eq!(path, PathBuf::from("tests/no_such_dir/washington.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn declared_optional_column_must_exist_in_file() {
    let mut config = fixtures();
    config.cities.insert(
        City::Washington,
        CitySource::new("washington.csv", [OptionalField::Gender]),
    );
    let err = trips::load(
        &config,
        &FilterCriteria::unfiltered(City::Washington),
        &IngestionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BikeshareError::SchemaMismatch { .. }));
}

#[test]
fn blank_start_times_fail_instead_of_loading_unknown_calendar_values() {
    let config = DatasetConfig {
        data_dir: PathBuf::from("tests/fixtures/blank_start_times"),
        ..Default::default()
    };
    let err = trips::load(
        &config,
        &FilterCriteria::unfiltered(City::Washington),
        &IngestionOptions::default(),
    )
    .unwrap_err();
    match err {
        BikeshareError::ParseError { row, column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, START_TIME);
        }
        other => panic!("unexpected error: {other}"),
    }
}
