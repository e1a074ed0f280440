//! Trip table loading: read a city's CSV, derive calendar columns, apply month/day filters.

use std::collections::BTreeSet;

use chrono::{Datelike, Timelike};

use crate::config::{City, CitySource, DatasetConfig, OptionalField};
use crate::error::BikeshareResult;
use crate::filters::{weekday_name, DayFilter, FilterCriteria, MonthFilter};
use crate::ingestion::{ingest_from_path, IngestionOptions};
use crate::processing::column_equals;
use crate::types::{DataSet, DataType, Field, Schema, Value};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Derived from `Start Time` after loading.
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const HOUR: &str = "hour";

/// Source schema for a city: the six common columns plus whatever optional ones it declares.
///
/// Start Time is required since every derived calendar column comes from it.
pub fn trip_schema(source: &CitySource) -> Schema {
    let mut fields = vec![
        Field::required(START_TIME, DataType::Timestamp),
        Field::new(END_TIME, DataType::Timestamp),
        Field::new(TRIP_DURATION, DataType::Float64),
        Field::new(START_STATION, DataType::Utf8),
        Field::new(END_STATION, DataType::Utf8),
        Field::new(USER_TYPE, DataType::Utf8),
    ];
    for field in &source.optional_fields {
        let data_type = match field {
            OptionalField::Gender => DataType::Utf8,
            // Stored as `1992.0` in the source files.
            OptionalField::BirthYear => DataType::Float64,
        };
        fields.push(Field::new(field.column(), data_type));
    }
    Schema::new(fields)
}

/// One city's trips with derived calendar columns, in source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    /// City the trips were loaded for.
    pub city: City,
    /// Optional columns this table carries.
    pub optional_fields: BTreeSet<OptionalField>,
    /// Source columns followed by the derived calendar columns.
    pub data: DataSet,
}

impl TripTable {
    /// Wrap an ingested dataset and attach `month`, `day_of_week` and `hour`.
    pub fn from_dataset(city: City, source: &CitySource, data: DataSet) -> Self {
        Self {
            city,
            optional_fields: source.optional_fields.clone(),
            data: derive_calendar(data),
        }
    }

    /// Number of trips after filtering.
    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    /// `true` when no trip matched the filters.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether this table carries `field`.
    pub fn has(&self, field: OptionalField) -> bool {
        self.optional_fields.contains(&field)
    }

    /// Keep only rows matching `month` and `day`. Row order is preserved.
    pub fn filtered(self, month: MonthFilter, day: DayFilter) -> Self {
        let mut data = self.data;
        if let (MonthFilter::Month(m), Some(idx)) = (month, data.schema.index_of(MONTH)) {
            data = data.retain_rows(column_equals(idx, Value::Int64(i64::from(m))));
        }
        if let (DayFilter::Day(d), Some(idx)) = (day, data.schema.index_of(DAY_OF_WEEK)) {
            data = data.retain_rows(column_equals(idx, Value::Utf8(weekday_name(d).to_string())));
        }
        Self { data, ..self }
    }
}

fn derive_calendar(data: DataSet) -> DataSet {
    let Some(start_idx) = data.schema.index_of(START_TIME) else {
        return data;
    };
    let derived = vec![
        Field::new(MONTH, DataType::Int64),
        Field::new(DAY_OF_WEEK, DataType::Utf8),
        Field::new(HOUR, DataType::Int64),
    ];
    data.with_derived_columns(derived, |row| match row.get(start_idx) {
        Some(Value::Timestamp(ts)) => vec![
            Value::Int64(i64::from(ts.month())),
            Value::Utf8(weekday_name(ts.weekday()).to_string()),
            Value::Int64(i64::from(ts.hour())),
        ],
        _ => vec![Value::Null, Value::Null, Value::Null],
    })
}

/// Load `criteria.city` from its configured file and apply the month/day filters.
///
/// An empty result is not an error. A missing or unreadable file yields
/// [`crate::BikeshareError::DataSourceNotFound`].
pub fn load(
    config: &DatasetConfig,
    criteria: &FilterCriteria,
    options: &IngestionOptions,
) -> BikeshareResult<TripTable> {
    let source = config.source(criteria.city)?;
    let path = config.source_path(criteria.city)?;
    let data = ingest_from_path(criteria.city.name(), &path, &trip_schema(source), options)?;
    let loaded = data.row_count();

    let table = TripTable::from_dataset(criteria.city, source, data).filtered(criteria.month, criteria.day);
    log::debug!("{criteria}: kept {} of {loaded} rows", table.row_count());
    Ok(table)
}
