//! Core data model types for trip tables.
//!
//! A city's trips are ingested into an in-memory [`DataSet`] using a [`Schema`] (a list of
//! typed [`Field`]s) built from that city's schema descriptor.

use std::fmt;

use chrono::NaiveDateTime;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
    /// Calendar date and time without a zone (`2017-01-01 00:07:57`).
    Timestamp,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
    /// Whether empty cells are accepted (as [`Value::Null`]).
    pub nullable: bool,
}

impl Field {
    /// Create a new nullable field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }

    /// Create a field that must have a value in every row.
    pub fn required(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            nullable: false,
            ..Self::new(name, data_type)
        }
    }
}

/// A list of fields describing the expected shape of incoming data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Timestamp.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Numeric view of the value; `None` for nulls and non-numeric values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NaN"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v:?}"),
            Value::Utf8(s) => f.write_str(s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Hashable identity of a [`Value`], used for frequency counting.
///
/// Floats are keyed by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Int64(i64),
    Float64(u64),
    Utf8(String),
    Timestamp(NaiveDateTime),
}

impl ValueKey {
    /// `None` for nulls, which never take part in counts.
    pub(crate) fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Int64(v) => Some(Self::Int64(*v)),
            Value::Float64(v) => Some(Self::Float64(v.to_bits())),
            Value::Utf8(s) => Some(Self::Utf8(s.clone())),
            Value::Timestamp(ts) => Some(Self::Timestamp(*ts)),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the values of one column by index, in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Consume the dataset and keep only rows that match `predicate`.
    ///
    /// Same semantics as [`DataSet::filter_rows`] without cloning surviving rows.
    pub fn retain_rows<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        self.rows.retain(|row| predicate(row.as_slice()));
        self
    }

    /// Create a new dataset with `fields` appended to the schema, filled per row by `deriver`.
    ///
    /// # Panics
    ///
    /// Panics if `deriver` returns a different number of values than `fields.len()`.
    pub fn with_derived_columns<F>(self, fields: Vec<Field>, mut deriver: F) -> Self
    where
        F: FnMut(&[Value]) -> Vec<Value>,
    {
        let added = fields.len();
        let mut schema = self.schema;
        schema.fields.extend(fields);

        let rows = self
            .rows
            .into_iter()
            .map(|mut row| {
                let extra = deriver(row.as_slice());
                assert!(
                    extra.len() == added,
                    "derived row length {} does not match derived field count {}",
                    extra.len(),
                    added
                );
                row.extend(extra);
                row
            })
            .collect();

        Self { schema, rows }
    }
}
