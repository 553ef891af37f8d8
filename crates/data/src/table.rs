//! In-memory source tables.
//!
//! A [`SourceTable`] is the loaded form of one columnar file: an ordered list of named
//! columns holding loosely typed cells. No schema is enforced; callers locate columns by
//! name heuristics (see [`crate::columns`]).

use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text used for identifier matching and value search.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Text(text) => Some(text.clone()),
            Cell::Bool(flag) => Some(flag.to_string()),
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                Some(format!("{}", *value as i64))
            }
            Cell::Number(value) => Some(value.to_string()),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Number(value) => Number::from_f64(*value).map_or(Value::Null, Value::Number),
            Cell::Text(text) => Value::String(text.clone()),
            Cell::Bool(flag) => Value::Bool(*flag),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn numbers(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().copied().map(Cell::Number).collect())
    }

    pub fn texts(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(
            name,
            values.iter().map(|v| Cell::Text((*v).to_string())).collect(),
        )
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.cells.iter().any(|c| matches!(c, Cell::Number(_)))
            && self
                .cells
                .iter()
                .all(|c| matches!(c, Cell::Number(_) | Cell::Null))
    }

    #[must_use]
    pub fn is_textual(&self) -> bool {
        self.cells.iter().any(|c| matches!(c, Cell::Text(_)))
    }

    fn finite_numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells
            .iter()
            .filter_map(Cell::as_f64)
            .filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .finite_numbers()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Sample standard deviation (n - 1), `None` below two values.
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        let values: Vec<f64> = self.finite_numbers().collect();
        if values.len() < 2 {
            return None;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (values.len() - 1) as f64;
        Some(var.sqrt())
    }

    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.finite_numbers().reduce(f64::min)
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.finite_numbers().reduce(f64::max)
    }

    #[must_use]
    pub fn unique_texts(&self) -> usize {
        let mut seen: Vec<String> = self.cells.iter().filter_map(Cell::as_text).collect();
        seen.sort();
        seen.dedup();
        seen.len()
    }

    /// Most frequent non-null value; ties resolve to the value seen first.
    #[must_use]
    pub fn most_common(&self) -> Option<String> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for text in self.cells.iter().filter_map(Cell::as_text) {
            match counts.iter_mut().find(|(seen, _)| *seen == text) {
                Some((_, count)) => *count += 1,
                None => counts.push((text, 1)),
            }
        }
        let mut best: Option<(String, usize)> = None;
        for (text, count) in counts {
            if best.as_ref().map_or(true, |(_, top)| count > *top) {
                best = Some((text, count));
            }
        }
        best.map(|(text, _)| text)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    name: String,
    columns: Vec<Column>,
}

impl SourceTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Row count; ragged tables report their longest column.
    #[must_use]
    pub fn height(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> &Cell {
        self.columns
            .get(column)
            .and_then(|c| c.cells.get(row))
            .unwrap_or(&Cell::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_summaries_skip_nulls() {
        let column = Column::new(
            "rmse",
            vec![Cell::Number(1.0), Cell::Null, Cell::Number(3.0)],
        );
        assert!(column.is_numeric());
        assert_eq!(column.mean(), Some(2.0));
        assert_eq!(column.min(), Some(1.0));
        assert_eq!(column.max(), Some(3.0));
        assert!((column.std_dev().unwrap() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn text_summaries_prefer_first_seen_on_ties() {
        let column = Column::texts("model", &["lstm", "xgboost", "lstm", "xgboost"]);
        assert!(!column.is_numeric());
        assert!(column.is_textual());
        assert_eq!(column.unique_texts(), 2);
        assert_eq!(column.most_common().as_deref(), Some("lstm"));
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(3.0).as_text().as_deref(), Some("3"));
        assert_eq!(Cell::Number(0.25).as_text().as_deref(), Some("0.25"));
        assert_eq!(Cell::Number(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn out_of_range_cells_read_as_null() {
        let table = SourceTable::new("t").with_column(Column::numbers("a", &[1.0]));
        assert_eq!(table.cell(0, 5), &Cell::Null);
        assert_eq!(table.cell(3, 0), &Cell::Null);
        assert_eq!(table.height(), 1);
        assert_eq!(table.width(), 1);
    }
}
