//! Row filtering for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Returns a predicate keeping rows whose `idx` column equals `expected`.
///
/// Rows shorter than `idx` never match.
pub fn column_equals(idx: usize, expected: Value) -> impl FnMut(&[Value]) -> bool {
    move |row| row.get(idx) == Some(&expected)
}

#[cfg(test)]
mod tests {
    use super::{column_equals, filter};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Trip Duration", DataType::Int64),
            Field::new("month", DataType::Int64),
            Field::new("day_of_week", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(300), Value::Int64(1), Value::Utf8("Sunday".to_string())],
            vec![Value::Int64(450), Value::Int64(2), Value::Utf8("Monday".to_string())],
            vec![Value::Int64(120), Value::Int64(1), Value::Utf8("Monday".to_string())],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn schema_index_of_works() {
        let ds = sample_dataset();
        assert_eq!(ds.schema.index_of("Trip Duration"), Some(0));
        assert_eq!(ds.schema.index_of("month"), Some(1));
        assert_eq!(ds.schema.index_of("day_of_week"), Some(2));
        assert_eq!(ds.schema.index_of("missing"), None);
    }

    #[test]
    fn filter_rows_by_month_preserves_order() {
        let ds = sample_dataset();
        let month_idx = ds.schema.index_of("month").unwrap();

        let out = filter(&ds, column_equals(month_idx, Value::Int64(1)));

        assert_eq!(out.schema, ds.schema);
        assert_eq!(
            out.rows,
            vec![
                vec![Value::Int64(300), Value::Int64(1), Value::Utf8("Sunday".to_string())],
                vec![Value::Int64(120), Value::Int64(1), Value::Utf8("Monday".to_string())],
            ]
        );
        // Original unchanged
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn chained_filters_intersect() {
        let ds = sample_dataset();
        let month_idx = ds.schema.index_of("month").unwrap();
        let day_idx = ds.schema.index_of("day_of_week").unwrap();

        let out = filter(&ds, column_equals(month_idx, Value::Int64(1)))
            .retain_rows(column_equals(day_idx, Value::Utf8("Monday".to_string())));

        assert_eq!(out.row_count(), 1);
        assert_eq!(out.rows[0][0], Value::Int64(120));
    }

    #[test]
    fn filter_rows_can_return_empty_dataset() {
        let ds = sample_dataset();
        let out = ds.filter_rows(|_| false);
        assert_eq!(out.schema, ds.schema);
        assert!(out.is_empty());
    }
}
