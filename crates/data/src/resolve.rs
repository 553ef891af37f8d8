//! Row resolution for a farm identifier.
//!
//! Each resolver inspects one table and either claims a set of rows or passes. Resolvers
//! run in order through [`first_success`]; the first claim wins.

use crate::columns::identifier_column;
use crate::farm::{farm_number, normalize_farm_id, sibling_variants, KNOWN_FARM_COUNT};
use crate::table::SourceTable;
use serde::Serialize;

/// How the rows backing a value were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// A farm identifier column held the canonical id (or one of its variants).
    IdentifierColumn,
    /// No identifier column; row `N-1` was assumed to hold farm `N`.
    Positional,
    /// No identifier requested; values are column means over every row.
    Aggregate,
}

impl Resolution {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdentifierColumn => "identifier_column",
            Self::Positional => "positional",
            Self::Aggregate => "aggregate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMatch {
    pub rows: Vec<usize>,
    pub resolution: Resolution,
}

pub type RowResolver = fn(&SourceTable, &str) -> Option<RowMatch>;

/// Resolvers in priority order.
pub const ROW_RESOLVERS: &[RowResolver] = &[by_identifier_column, by_position];

/// Run `attempt` over `steps` in order and return the first `Some`.
pub fn first_success<S, T>(steps: &[S], attempt: impl FnMut(&S) -> Option<T>) -> Option<T> {
    steps.iter().find_map(attempt)
}

/// Resolve `canonical` (already normalized) against `table` using [`ROW_RESOLVERS`].
#[must_use]
pub fn resolve_rows(table: &SourceTable, canonical: &str) -> Option<RowMatch> {
    first_success(ROW_RESOLVERS, |resolver| resolver(table, canonical))
}

/// Rows whose identifier cell normalizes to `canonical` or spells one of its variants.
#[must_use]
pub fn by_identifier_column(table: &SourceTable, canonical: &str) -> Option<RowMatch> {
    let column = identifier_column(table)?;
    let variants = sibling_variants(canonical);
    let rows: Vec<usize> = (0..table.height())
        .filter(|&row| {
            table.cell(column, row).as_text().is_some_and(|text| {
                let lowered = text.trim().to_lowercase();
                normalize_farm_id(&lowered) == canonical || variants.contains(&lowered)
            })
        })
        .collect();
    (!rows.is_empty()).then_some(RowMatch {
        rows,
        resolution: Resolution::IdentifierColumn,
    })
}

/// Row `N-1` for farm `N`, only when the table has no identifier column and no more rows
/// than there are known farms. Row order is trusted, not verified.
#[must_use]
pub fn by_position(table: &SourceTable, canonical: &str) -> Option<RowMatch> {
    if identifier_column(table).is_some() {
        return None;
    }
    let height = table.height();
    if height == 0 || height > KNOWN_FARM_COUNT {
        return None;
    }
    let number = farm_number(canonical)?;
    (1..=height).contains(&number).then(|| {
        log::debug!(
            "Positional row mapping for {canonical} in {} ({height} rows)",
            table.name()
        );
        RowMatch {
            rows: vec![number - 1],
            resolution: Resolution::Positional,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn keyed() -> SourceTable {
        SourceTable::new("keyed")
            .with_column(Column::texts("wind_farm", &["WF1", "wind farm 2", "3", "wp2"]))
            .with_column(Column::numbers("capacity_factor", &[0.3, 0.28, 0.33, 0.29]))
    }

    fn unkeyed(rows: usize) -> SourceTable {
        let values: Vec<f64> = (0..rows).map(|r| r as f64).collect();
        SourceTable::new("unkeyed").with_column(Column::numbers("capacity_factor", &values))
    }

    #[test]
    fn identifier_column_matches_every_surface_form() {
        let table = keyed();
        let found = resolve_rows(&table, "wp2").unwrap();
        assert_eq!(found.rows, vec![1, 3]);
        assert_eq!(found.resolution, Resolution::IdentifierColumn);
        assert_eq!(resolve_rows(&table, "wp1").unwrap().rows, vec![0]);
        assert_eq!(resolve_rows(&table, "wp3").unwrap().rows, vec![2]);
    }

    #[test]
    fn identifier_column_blocks_positional_guessing() {
        // wp5 is absent from a keyed table; row 4 must not be used.
        assert_eq!(resolve_rows(&keyed(), "wp5"), None);
    }

    #[test]
    fn positional_fallback_only_for_small_unkeyed_tables() {
        let found = resolve_rows(&unkeyed(7), "wp4").unwrap();
        assert_eq!(found.rows, vec![3]);
        assert_eq!(found.resolution, Resolution::Positional);

        assert_eq!(resolve_rows(&unkeyed(8), "wp4"), None);
        assert_eq!(resolve_rows(&unkeyed(3), "wp4"), None);
        assert_eq!(resolve_rows(&unkeyed(7), "wp9"), None);
        assert_eq!(resolve_rows(&unkeyed(0), "wp1"), None);
    }

    #[test]
    fn first_success_stops_at_first_claim() {
        let mut calls = Vec::new();
        let picked = first_success(&[1, 2, 3], |step| {
            calls.push(*step);
            (*step >= 2).then_some(*step * 10)
        });
        assert_eq!(picked, Some(20));
        assert_eq!(calls, vec![1, 2]);
        assert_eq!(first_success::<i32, i32>(&[], |_| Some(1)), None);
    }
}
