//! Frequency operations (`mode`, `value_counts`) for [`crate::types::DataSet`].
//!
//! Nulls never take part in either operation. Ties are broken by the row order in which each
//! value was first seen, so results are deterministic for a fixed input order.

use std::collections::HashMap;

use crate::types::{DataSet, Value, ValueKey};

/// Count non-null occurrences in column `column`.
///
/// The result is sorted by descending count; values with equal counts keep first-seen order.
/// Returns `None` if `column` does not exist in the schema.
pub fn value_counts(dataset: &DataSet, column: &str) -> Option<Vec<(Value, usize)>> {
    let idx = dataset.schema.index_of(column)?;
    Some(counts_by_first_seen(dataset.column(idx)).sorted())
}

/// Most frequent non-null value in column `column`.
///
/// - Returns `None` if `column` does not exist in the schema.
/// - Returns `Some(Value::Null)` if the column has no non-null values (including empty datasets).
pub fn mode(dataset: &DataSet, column: &str) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;
    Some(mode_of(dataset.column(idx)))
}

/// Most frequent non-null value from an arbitrary value iterator.
///
/// Used by reports that key on a value derived per row (e.g. a start/end station pair).
pub fn mode_of<'a>(values: impl IntoIterator<Item = &'a Value>) -> Value {
    counts_by_first_seen(values).top().unwrap_or(Value::Null)
}

struct Tally {
    slots: HashMap<ValueKey, usize>,
    entries: Vec<(Value, usize)>,
}

impl Tally {
    fn top(self) -> Option<Value> {
        // Only a strictly larger count replaces the current best.
        let mut best: Option<(Value, usize)> = None;
        for (value, count) in self.entries {
            match &best {
                Some((_, b)) if count <= *b => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(v, _)| v)
    }

    fn sorted(self) -> Vec<(Value, usize)> {
        let mut entries = self.entries;
        // Stable sort preserves first-seen order within equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

fn counts_by_first_seen<'a>(values: impl IntoIterator<Item = &'a Value>) -> Tally {
    let mut tally = Tally {
        slots: HashMap::new(),
        entries: Vec::new(),
    };
    for value in values {
        let Some(key) = ValueKey::of(value) else {
            continue;
        };
        match tally.slots.get(&key) {
            Some(&slot) => tally.entries[slot].1 += 1,
            None => {
                tally.slots.insert(key, tally.entries.len());
                tally.entries.push((value.clone(), 1));
            }
        }
    }
    tally
}
