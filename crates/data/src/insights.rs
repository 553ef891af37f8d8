//! Composite reports built on top of the category tables.

use crate::cache::TableLoad;
use crate::catalog::{
    DataCategory, Extraction, BASELINE_KEYWORDS, BUSINESS_KEYWORDS, PERFORMANCE_KEYWORDS,
};
use crate::columns::{extract_rows, identifier_column, name_contains_any};
use crate::farm::{farm_number, normalize_farm_id};
use crate::reader::DataReader;
use crate::resolve::resolve_rows;
use crate::table::SourceTable;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

const EXTRACTION_METHOD: &str = "columnar_direct_read";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerCurveReport {
    pub wind_farm: Option<String>,
    pub power_curve_parameters: Map<String, Value>,
    pub capacity_factors: Map<String, Value>,
    pub data_quality: Map<String, Value>,
    pub source_files: Vec<String>,
    pub metadata: ReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub extraction_method: &'static str,
    pub files_processed: usize,
    pub wind_farms_available: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub model_type: Option<String>,
    pub forecast_horizon: Option<u32>,
    pub performance_metrics: Map<String, Value>,
    pub model_comparisons: Map<String, Value>,
    pub source_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessReport {
    pub accuracy_improvement: Option<f64>,
    pub business_metrics: Map<String, Value>,
    pub co2_displacement: Map<String, Value>,
    pub economic_value: Map<String, Value>,
    pub grid_integration: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub scaled_metrics: Map<String, Value>,
    pub source_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmSummary {
    pub wind_farm: Option<String>,
    pub power_curves: Map<String, Value>,
    pub capacity_factors: Map<String, Value>,
    pub data_quality: Map<String, Value>,
    pub forecast_performance: Map<String, Value>,
    pub metadata: FarmSummaryMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmSummaryMetadata {
    pub data_sources: Vec<String>,
    pub available_farms: Vec<String>,
}

/// Rows of `table` a report should read: every row without a farm, the resolved rows
/// with one, `None` when the farm is not present.
fn report_rows(table: &SourceTable, farm: Option<&str>) -> Option<Vec<usize>> {
    match farm {
        None => Some((0..table.height()).collect()),
        Some(id) => resolve_rows(table, id).map(|found| found.rows),
    }
}

fn merge_missing(into: &mut Map<String, Value>, from: Map<String, Value>) {
    for (key, value) in from {
        into.entry(key).or_insert(value);
    }
}

fn join_errors(errors: Vec<String>) -> Option<String> {
    (!errors.is_empty()).then(|| errors.join("; "))
}

fn push_unique(files: &mut Vec<String>, file: &str) {
    if !files.iter().any(|f| f == file) {
        files.push(file.to_string());
    }
}

impl DataReader {
    /// Power-curve parameters, capacity factors and data-quality indicators for one farm
    /// (or every row) from the power-curve candidates.
    pub fn power_curve_data(&self, wind_farm: Option<&str>) -> PowerCurveReport {
        let canonical = wind_farm.map(normalize_farm_id);
        let (tables, errors) = self.load_category(DataCategory::PowerCurve);
        let extraction_for = |category: DataCategory| {
            self.catalog()
                .entry(category)
                .map_or(Extraction::Matching(&[]), |entry| entry.extraction)
        };
        let power_fields = extraction_for(DataCategory::PowerCurve);
        let capacity_keywords = extraction_for(DataCategory::CapacityFactor);
        let quality_keywords = extraction_for(DataCategory::DataQuality);

        let mut report = PowerCurveReport {
            wind_farm: canonical.clone(),
            power_curve_parameters: Map::new(),
            capacity_factors: Map::new(),
            data_quality: Map::new(),
            source_files: Vec::new(),
            metadata: ReportMetadata {
                extraction_method: EXTRACTION_METHOD,
                files_processed: 0,
                wind_farms_available: Vec::new(),
            },
            error: join_errors(errors),
        };

        for (file, table) in &tables {
            push_unique(&mut report.source_files, file);
            let Some(rows) = report_rows(table, canonical.as_deref()) else {
                continue;
            };
            merge_missing(
                &mut report.power_curve_parameters,
                extract_rows(table, power_fields, &rows),
            );
            merge_missing(
                &mut report.capacity_factors,
                extract_rows(table, capacity_keywords, &rows),
            );
            merge_missing(
                &mut report.data_quality,
                extract_rows(table, quality_keywords, &rows),
            );
        }

        report.metadata.files_processed = report.source_files.len();
        report.metadata.wind_farms_available = self.available_wind_farms();
        report
    }

    /// Metric columns filtered by model (case-insensitive containment on a `model` column)
    /// and horizon (equality on a `horizon` column). Files with `baseline` in their name
    /// feed `model_comparisons` instead.
    pub fn forecast_performance(&self, model: Option<&str>, horizon: Option<u32>) -> PerformanceReport {
        let (tables, errors) = self.load_category(DataCategory::ForecastPerformance);
        let mut report = PerformanceReport {
            model_type: model.map(str::to_string),
            forecast_horizon: horizon,
            performance_metrics: Map::new(),
            model_comparisons: Map::new(),
            source_files: Vec::new(),
            error: join_errors(errors),
        };

        for (file, table) in &tables {
            push_unique(&mut report.source_files, file);
            if file.to_lowercase().contains("baseline") {
                let rows: Vec<usize> = (0..table.height()).collect();
                merge_missing(
                    &mut report.model_comparisons,
                    extract_rows(table, Extraction::Matching(BASELINE_KEYWORDS), &rows),
                );
                continue;
            }
            let rows = filter_model_rows(table, model, horizon);
            merge_missing(
                &mut report.performance_metrics,
                extract_rows(table, Extraction::Matching(PERFORMANCE_KEYWORDS), &rows),
            );
        }
        report
    }

    /// Business columns grouped by theme, plus `<key>_scaled` values proportional to an
    /// accuracy improvement in percent.
    pub fn business_metrics(&self, accuracy_improvement: Option<f64>) -> BusinessReport {
        let (tables, errors) = self.load_category(DataCategory::BusinessImpact);
        let mut report = BusinessReport {
            accuracy_improvement,
            business_metrics: Map::new(),
            co2_displacement: Map::new(),
            economic_value: Map::new(),
            grid_integration: Map::new(),
            scaled_metrics: Map::new(),
            source_files: Vec::new(),
            error: join_errors(errors),
        };

        for (file, table) in &tables {
            push_unique(&mut report.source_files, file);
            let rows: Vec<usize> = (0..table.height()).collect();
            merge_missing(
                &mut report.business_metrics,
                extract_rows(table, Extraction::Matching(BUSINESS_KEYWORDS), &rows),
            );
            merge_missing(
                &mut report.grid_integration,
                extract_rows(table, Extraction::Matching(&["grid", "penetration"]), &rows),
            );
        }

        for (key, value) in &report.business_metrics {
            let target = if name_contains_any(key, &["co2", "carbon"]) {
                &mut report.co2_displacement
            } else {
                &mut report.economic_value
            };
            target.insert(key.clone(), value.clone());
        }

        if let Some(improvement) = accuracy_improvement.filter(|v| *v > 0.0) {
            report.scaled_metrics = scale_metrics(&report.business_metrics, improvement);
        }
        report
    }

    /// Power-curve, capacity, quality and performance values for one farm in one object.
    pub fn wind_farm_summary(&self, wind_farm: Option<&str>) -> FarmSummary {
        let power = self.power_curve_data(wind_farm);
        let performance = self.fetch(DataCategory::ForecastPerformance, wind_farm);

        let mut data_sources = power.source_files.clone();
        for file in &performance.source_files {
            push_unique(&mut data_sources, file);
        }

        FarmSummary {
            wind_farm: power.wind_farm,
            power_curves: power.power_curve_parameters,
            capacity_factors: power.capacity_factors,
            data_quality: power.data_quality,
            forecast_performance: performance.values,
            metadata: FarmSummaryMetadata {
                data_sources,
                available_farms: power.metadata.wind_farms_available,
            },
        }
    }

    /// Canonical ids found in any identifier column across every candidate file.
    pub fn available_wind_farms(&self) -> Vec<String> {
        let mut farms = BTreeSet::new();
        for file in self.catalog().all_files() {
            let TableLoad::Loaded(table) = self.load(file) else {
                continue;
            };
            let Some(column) = identifier_column(&table) else {
                continue;
            };
            for row in 0..table.height() {
                if let Some(text) = table.cell(column, row).as_text() {
                    let canonical = normalize_farm_id(&text);
                    if !canonical.is_empty() {
                        farms.insert(canonical);
                    }
                }
            }
        }
        let mut farms: Vec<String> = farms.into_iter().collect();
        farms.sort_by_key(|id| (farm_number(id).unwrap_or(usize::MAX), id.clone()));
        farms
    }
}

fn filter_model_rows(table: &SourceTable, model: Option<&str>, horizon: Option<u32>) -> Vec<usize> {
    let model_column = table
        .columns()
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case("model"));
    let horizon_column = table
        .columns()
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case("horizon"));
    let model = model.map(|m| m.to_lowercase());

    (0..table.height())
        .filter(|&row| match (&model, model_column) {
            (Some(wanted), Some(col)) => table
                .cell(col, row)
                .as_text()
                .is_some_and(|text| text.to_lowercase().contains(wanted.as_str())),
            _ => true,
        })
        .filter(|&row| match (horizon, horizon_column) {
            (Some(wanted), Some(col)) => table
                .cell(col, row)
                .as_f64()
                .is_some_and(|value| value == f64::from(wanted)),
            _ => true,
        })
        .collect()
}

fn scale_metrics(metrics: &Map<String, Value>, improvement: f64) -> Map<String, Value> {
    metrics
        .iter()
        .filter_map(|(key, value)| {
            let number = value.as_f64().filter(|v| *v > 0.0)?;
            let scaled = serde_json::Number::from_f64(number * improvement / 100.0)?;
            Some((format!("{key}_scaled"), Value::Number(scaled)))
        })
        .collect()
}
