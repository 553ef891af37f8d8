//! Column-name heuristics.
//!
//! Tables carry no schema, so every lookup is keyword containment on the lower-cased
//! column name. When several columns match, the first in the table's native order wins.

use crate::catalog::{Extraction, FieldRule};
use crate::table::{Cell, Column, SourceTable};
use serde_json::{Map, Value};

/// Exact (lower-cased) names recognized as a farm identifier column.
pub const ID_COLUMN_NAMES: &[&str] = &[
    "wind_farm",
    "wind_farm_id",
    "farm",
    "farm_id",
    "windfarm",
    "site",
];

/// Index of the farm identifier column: exact names first, then any name containing `farm`.
#[must_use]
pub fn identifier_column(table: &SourceTable) -> Option<usize> {
    let lowered: Vec<String> = table
        .columns()
        .iter()
        .map(|c| c.name.to_lowercase())
        .collect();
    lowered
        .iter()
        .position(|name| ID_COLUMN_NAMES.contains(&name.as_str()))
        .or_else(|| lowered.iter().position(|name| name.contains("farm")))
}

#[must_use]
pub fn name_contains_any(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().any(|k| name.contains(k))
}

#[must_use]
pub fn name_contains_all(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().all(|k| name.contains(k))
}

/// Columns an extraction rule selects, paired with the key they are reported under.
///
/// The identifier column never counts as a value column.
#[must_use]
pub fn select_columns<'t>(
    table: &'t SourceTable,
    extraction: Extraction,
) -> Vec<(String, &'t Column)> {
    let id_column = identifier_column(table);
    let candidates: Vec<(usize, &Column)> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != id_column)
        .collect();

    match extraction {
        Extraction::Fields(rules) => rules
            .iter()
            .filter_map(|FieldRule { field, all_of }| {
                candidates
                    .iter()
                    .find(|(_, column)| name_contains_all(&column.name, all_of))
                    .map(|(_, column)| ((*field).to_string(), *column))
            })
            .collect(),
        Extraction::Matching(keywords) => candidates
            .into_iter()
            .filter(|(_, column)| name_contains_any(&column.name, keywords))
            .map(|(_, column)| (column.name.clone(), column))
            .collect(),
    }
}

/// Collapse the selected rows of a column into one value.
///
/// One row yields the cell itself; several rows yield the numeric mean, or the first
/// non-null cell for non-numeric columns.
#[must_use]
pub fn reduce_rows(column: &Column, rows: &[usize]) -> Value {
    let cells: Vec<&Cell> = rows
        .iter()
        .filter_map(|row| column.cells.get(*row))
        .collect();
    match cells.as_slice() {
        [] => Value::Null,
        [single] => single.to_json(),
        many => {
            let numbers: Vec<f64> = many.iter().filter_map(|c| c.as_f64()).collect();
            if numbers.is_empty() {
                many.iter()
                    .find(|c| !c.is_null())
                    .map_or(Value::Null, |c| c.to_json())
            } else {
                let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
                Cell::Number(mean).to_json()
            }
        }
    }
}

/// Row-shaped view of a column: a scalar for one row, an object keyed by row index for
/// several, `null` for none.
#[must_use]
pub fn rows_value(column: &Column, rows: &[usize]) -> Value {
    match rows {
        [] => Value::Null,
        [row] => column.cells.get(*row).map_or(Value::Null, Cell::to_json),
        many => {
            let mut map = Map::new();
            for row in many {
                let cell = column.cells.get(*row).map_or(Value::Null, Cell::to_json);
                map.insert(row.to_string(), cell);
            }
            Value::Object(map)
        }
    }
}

/// Values of matching columns restricted to `rows`, shaped by [`rows_value`].
#[must_use]
pub fn extract_rows(table: &SourceTable, extraction: Extraction, rows: &[usize]) -> Map<String, Value> {
    select_columns(table, extraction)
        .into_iter()
        .map(|(key, column)| (key, rows_value(column, rows)))
        .collect()
}
