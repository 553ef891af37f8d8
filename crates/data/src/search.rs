use crate::catalog::DataCategory;
use crate::reader::DataReader;
use crate::table::{Column, SourceTable};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Matches for the search terms inside one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableMatches {
    pub column_matches: Vec<String>,
    /// `<column>_<term>` → number of text cells containing the term.
    pub value_matches: BTreeMap<String, usize>,
    pub summary_stats: Map<String, Value>,
}

impl TableMatches {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.column_matches.is_empty() && self.value_matches.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub query_terms: Vec<String>,
    pub search_results: BTreeMap<String, TableMatches>,
    pub recommendations: Vec<String>,
    pub source_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Column-name hints that point at a follow-up tool, checked against matched names.
const RECOMMENDATIONS: &[(&[&str], &str)] = &[
    (
        &["power"],
        "Consider analyzing power curve characteristics using analyze_power_curves()",
    ),
    (
        &["forecast", "rmse"],
        "Evaluate forecast performance using evaluate_forecast_performance()",
    ),
    (
        &["temporal", "time"],
        "Assess temporal patterns using assess_temporal_patterns()",
    ),
    (
        &["business", "co2"],
        "Calculate business impact using calculate_business_impact()",
    ),
];

impl DataReader {
    /// Search column names and text cells of the given categories (all when empty).
    pub fn search(&self, terms: &[String], categories: &[DataCategory]) -> SearchReport {
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let categories: Vec<DataCategory> = if categories.is_empty() {
            DataCategory::ALL.to_vec()
        } else {
            categories.to_vec()
        };

        let mut report = SearchReport {
            query_terms: terms.clone(),
            search_results: BTreeMap::new(),
            recommendations: Vec::new(),
            source_files: Vec::new(),
            error: None,
        };
        let mut errors = Vec::new();

        for category in categories {
            let (tables, load_errors) = self.load_category(category);
            for message in load_errors {
                if !errors.contains(&message) {
                    errors.push(message);
                }
            }
            for (file, table) in tables {
                if report.search_results.contains_key(&file) {
                    continue;
                }
                let matches = search_table(&table, &terms);
                if !matches.is_empty() {
                    report.source_files.push(file.clone());
                    report.search_results.insert(file, matches);
                }
            }
        }

        report.recommendations = recommend(&report.search_results);
        report.error = (!errors.is_empty()).then(|| errors.join("; "));
        report
    }
}

/// Match `terms` (already lower-cased) against one table.
#[must_use]
pub fn search_table(table: &SourceTable, terms: &[String]) -> TableMatches {
    let mut matches = TableMatches::default();

    for term in terms {
        for column in table.columns() {
            if column.name.to_lowercase().contains(term.as_str())
                && !matches.column_matches.contains(&column.name)
            {
                matches.column_matches.push(column.name.clone());
            }
        }
    }

    for column in table.columns().iter().filter(|c| c.is_textual()) {
        for term in terms {
            let hits = column
                .cells
                .iter()
                .filter_map(|cell| cell.as_text())
                .filter(|text| text.to_lowercase().contains(term.as_str()))
                .count();
            if hits > 0 {
                matches
                    .value_matches
                    .insert(format!("{}_{term}", column.name), hits);
            }
        }
    }

    for name in &matches.column_matches {
        if let Some(column) = table.column(name) {
            matches.summary_stats.insert(name.clone(), summary_stats(column));
        }
    }
    matches
}

fn summary_stats(column: &Column) -> Value {
    if column.is_numeric() {
        json!({
            "mean": column.mean(),
            "std": column.std_dev(),
            "min": column.min(),
            "max": column.max(),
        })
    } else {
        json!({
            "unique_values": column.unique_texts(),
            "most_common": column.most_common(),
        })
    }
}

fn recommend(results: &BTreeMap<String, TableMatches>) -> Vec<String> {
    let haystack: Vec<String> = results
        .values()
        .flat_map(|m| m.column_matches.iter().chain(m.value_matches.keys()))
        .map(|name| name.to_lowercase())
        .collect();
    RECOMMENDATIONS
        .iter()
        .filter(|(hints, _)| {
            haystack
                .iter()
                .any(|name| hints.iter().any(|hint| name.contains(hint)))
        })
        .map(|(_, text)| (*text).to_string())
        .collect()
}
