//! Projection of loosely typed records onto a Polars `DataFrame`.

use crate::types::gust_record::{GustRecord, GustValue};
use polars::prelude::*;
use std::collections::HashSet;

/// Narrowest column type that holds every non-null value of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Empty,
    Bool,
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    fn of(value: &GustValue) -> Self {
        match value {
            GustValue::Null => ColumnKind::Empty,
            GustValue::Bool(_) => ColumnKind::Bool,
            GustValue::Integer(_) => ColumnKind::Integer,
            GustValue::Float(_) => ColumnKind::Float,
            GustValue::Text(_) => ColumnKind::Text,
        }
    }

    fn widen(self, other: ColumnKind) -> Self {
        use ColumnKind::*;
        match (self, other) {
            (Empty, k) | (k, Empty) => k,
            (a, b) if a == b => a,
            (Integer, Float) | (Float, Integer) => Float,
            _ => Text,
        }
    }
}

/// Field names across all records, in first-seen order.
fn column_names(records: &[GustRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|record| record.keys())
        .filter(|key| seen.insert(*key))
        .collect()
}

fn build_column(name: &str, cells: &[Option<&GustValue>]) -> Column {
    let kind = cells
        .iter()
        .flatten()
        .fold(ColumnKind::Empty, |kind, value| kind.widen(ColumnKind::of(value)));

    match kind {
        ColumnKind::Bool => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(GustValue::Bool(b)) => Some(*b),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        }
        ColumnKind::Integer => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(GustValue::Integer(i)) => Some(*i),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(GustValue::Float(x)) => Some(*x),
                    Some(GustValue::Integer(i)) => Some(*i as f64),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        }
        ColumnKind::Text | ColumnKind::Empty => {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(value) if !value.is_null() => Some(value.to_string()),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        }
    }
}

/// One row per record and one column per distinct field name.
///
/// Columns appear in the order their names are first seen. A record lacking a
/// field gets a null cell. Column types are inferred from the values present:
/// integers mixed with floats become `Float64`, any other mix becomes `String`.
pub fn records_to_dataframe(records: &[GustRecord]) -> PolarsResult<DataFrame> {
    let columns = column_names(records)
        .into_iter()
        .map(|name| {
            let cells: Vec<Option<&GustValue>> =
                records.iter().map(|record| record.get(name)).collect();
            build_column(name, &cells)
        })
        .collect();
    DataFrame::new(columns)
}
