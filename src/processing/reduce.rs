//! Reduction operations for [`crate::types::DataSet`].

use crate::types::{DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
    /// Arithmetic mean of numeric values, ignoring nulls. Always a `Float64`.
    Mean,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Min`/`Max`/`Mean`, returns `Some(Value::Null)` if there are no non-null values.
/// - For `Count`, always returns `Some(Value::Int64(row_count))`.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;
    let field = dataset.schema.fields.get(idx)?;

    match op {
        ReduceOp::Count => Some(Value::Int64(dataset.row_count() as i64)),
        ReduceOp::Mean => Some(mean(dataset, idx)),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => match field.data_type {
            DataType::Int64 => Some(fold_int(dataset, idx, op)),
            DataType::Float64 => Some(fold_float(dataset, idx, op)),
            DataType::Utf8 | DataType::Timestamp => Some(Value::Null),
        },
    }
}

fn fold_int(dataset: &DataSet, idx: usize, op: ReduceOp) -> Value {
    let acc = dataset.column(idx).fold(None, |acc: Option<i64>, v| match v {
        Value::Int64(v) => Some(match acc {
            None => *v,
            Some(a) => combine(op, a, *v),
        }),
        _ => acc,
    });
    acc.map(Value::Int64).unwrap_or(Value::Null)
}

fn fold_float(dataset: &DataSet, idx: usize, op: ReduceOp) -> Value {
    let acc = dataset.column(idx).fold(None, |acc: Option<f64>, v| match v {
        Value::Float64(v) => Some(match acc {
            None => *v,
            Some(a) => combine(op, a, *v),
        }),
        _ => acc,
    });
    acc.map(Value::Float64).unwrap_or(Value::Null)
}

fn combine<T: PartialOrd + std::ops::Add<Output = T>>(op: ReduceOp, a: T, v: T) -> T {
    match op {
        ReduceOp::Sum => a + v,
        ReduceOp::Min => {
            if v < a {
                v
            } else {
                a
            }
        }
        ReduceOp::Max => {
            if v > a {
                v
            } else {
                a
            }
        }
        ReduceOp::Count | ReduceOp::Mean => unreachable!("non-folding op handled earlier"),
    }
}

fn mean(dataset: &DataSet, idx: usize) -> Value {
    let (sum, n) = dataset
        .column(idx)
        .filter_map(Value::as_f64)
        .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        Value::Null
    } else {
        Value::Float64(sum / n as f64)
    }
}
