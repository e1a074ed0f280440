//! CSV ingestion implementation.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{BikeshareError, BikeshareResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Accepted `Start Time`/`End Time` layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all schema fields (order can differ; extra columns are ignored).
/// - Each value is parsed according to the schema field type.
/// - Empty cells, and cells missing from a short row, are nulls unless the field is required.
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &Schema) -> BikeshareResult<DataSet> {
    let mut rdr = reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema)
}

/// Reader settings used for trip files: headers on, ragged rows allowed.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> BikeshareResult<DataSet> {
    let headers = rdr.headers()?.clone();

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h.trim() == field.name) {
            Some(idx) => col_idxs.push(idx),
            None => {
                return Err(BikeshareError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (field, &csv_idx) in schema.fields.iter().zip(col_idxs.iter()) {
            let raw = record.get(csv_idx).unwrap_or("");
            row.push(parse_typed_value(user_row, field, raw)?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

fn parse_typed_value(row: usize, field: &Field, raw: &str) -> BikeshareResult<Value> {
    let parse_error = |message: String| BikeshareError::ParseError {
        row,
        column: field.name.clone(),
        raw: raw.to_owned(),
        message,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if field.nullable {
            return Ok(Value::Null);
        }
        return Err(parse_error("value is required".to_string()));
    }

    match field.data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Timestamp => parse_timestamp(trimmed).map(Value::Timestamp).map_err(parse_error),
    }
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| "expected timestamp like '2017-01-01 09:07:57'".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::parse_timestamp;

    #[test]
    fn parses_plain_and_fractional_timestamps() {
        let ts = parse_timestamp("2017-06-23 15:09:32").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour()), (6, 23, 15));

        let ts = parse_timestamp("2017-03-01 00:00:01.500").unwrap();
        assert_eq!((ts.month(), ts.second()), (3, 1));

        assert!(parse_timestamp("23/06/2017 15:09").is_err());
    }
}
