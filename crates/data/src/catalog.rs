//! Category → candidate file tables.
//!
//! The mapping is plain data so tests (and deployments with differently named artifacts)
//! can swap it out without touching the resolution logic.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCategory {
    PowerCurve,
    CapacityFactor,
    DataQuality,
    ForecastPerformance,
    TemporalPattern,
    SpatialAnalysis,
    BusinessImpact,
    Comprehensive,
}

impl DataCategory {
    pub const ALL: [DataCategory; 8] = [
        DataCategory::PowerCurve,
        DataCategory::CapacityFactor,
        DataCategory::DataQuality,
        DataCategory::ForecastPerformance,
        DataCategory::TemporalPattern,
        DataCategory::SpatialAnalysis,
        DataCategory::BusinessImpact,
        DataCategory::Comprehensive,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerCurve => "power_curve",
            Self::CapacityFactor => "capacity_factor",
            Self::DataQuality => "data_quality",
            Self::ForecastPerformance => "forecast_performance",
            Self::TemporalPattern => "temporal_pattern",
            Self::SpatialAnalysis => "spatial_analysis",
            Self::BusinessImpact => "business_impact",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Key under which extracted values appear in a fetch result.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::PowerCurve => "power_curve_parameters",
            Self::CapacityFactor => "capacity_factors",
            Self::DataQuality => "data_quality",
            Self::ForecastPerformance => "performance_metrics",
            Self::TemporalPattern => "temporal_patterns",
            Self::SpatialAnalysis => "spatial_metrics",
            Self::BusinessImpact => "business_metrics",
            Self::Comprehensive => "summary_statistics",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataCategory {
    type Err = DataError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim().to_lowercase().replace(['-', ' '], "_");
        let category = match key.as_str() {
            "power_curve" | "power_curves" => Self::PowerCurve,
            "capacity_factor" | "capacity_factors" => Self::CapacityFactor,
            "data_quality" => Self::DataQuality,
            "forecast_performance" | "performance" => Self::ForecastPerformance,
            "temporal_pattern" | "temporal_patterns" | "temporal" => Self::TemporalPattern,
            "spatial_analysis" | "spatial" => Self::SpatialAnalysis,
            "business_impact" | "business" => Self::BusinessImpact,
            "comprehensive" | "comprehensive_results" | "summary" => Self::Comprehensive,
            _ => return Err(DataError::UnknownCategory(raw.to_string())),
        };
        Ok(category)
    }
}

/// A named value located by requiring every keyword in the lower-cased column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub all_of: &'static [&'static str],
}

/// How values are pulled out of a table for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Fixed output fields; the first column (native order) satisfying a rule wins.
    Fields(&'static [FieldRule]),
    /// Every column whose name contains any keyword, reported under its own name.
    Matching(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: DataCategory,
    /// Candidate files in priority order.
    pub files: Vec<String>,
    pub extraction: Extraction,
}

const POWER_CURVE_FIELDS: &[FieldRule] = &[
    FieldRule {
        field: "cut_in_speed",
        all_of: &["cut", "in"],
    },
    FieldRule {
        field: "rated_speed",
        all_of: &["rated", "speed"],
    },
    FieldRule {
        field: "cut_out_speed",
        all_of: &["cut", "out"],
    },
    FieldRule {
        field: "rated_power",
        all_of: &["rated", "power"],
    },
    FieldRule {
        field: "capacity_factor",
        all_of: &["capacity", "factor"],
    },
    FieldRule {
        field: "power_coefficient",
        all_of: &["power", "coefficient"],
    },
];

pub const PERFORMANCE_KEYWORDS: &[&str] = &["rmse", "mae", "mape", "r2", "skill"];
pub const BASELINE_KEYWORDS: &[&str] = &["baseline", "persistence", "naive", "skill_score"];
pub const BUSINESS_KEYWORDS: &[&str] =
    &["co2", "carbon", "economic", "value", "cost", "revenue", "savings"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    #[must_use]
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entry(&self, category: DataCategory) -> Option<&CategoryEntry> {
        self.entries.iter().find(|s| s.category == category)
    }

    #[must_use]
    pub fn files(&self, category: DataCategory) -> &[String] {
        self.entry(category).map(|s| s.files.as_slice()).unwrap_or(&[])
    }

    #[must_use]
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Every candidate file across categories, deduplicated, first-seen order.
    #[must_use]
    pub fn all_files(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for file in self.entries.iter().flat_map(|s| s.files.iter()) {
            if !out.contains(&file.as_str()) {
                out.push(file);
            }
        }
        out
    }
}

fn catalog_entry(category: DataCategory, files: &[&str], extraction: Extraction) -> CategoryEntry {
    CategoryEntry {
        category,
        files: files.iter().map(|f| (*f).to_string()).collect(),
        extraction,
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            catalog_entry(
                DataCategory::PowerCurve,
                &[
                    "baseline_power_curve_parameters.parquet",
                    "power_curve_parameters.parquet",
                    "02_wind_physics_analysis.parquet",
                    "combined_power_wind.parquet",
                ],
                Extraction::Fields(POWER_CURVE_FIELDS),
            ),
            catalog_entry(
                DataCategory::CapacityFactor,
                &[
                    "02_wind_physics_analysis.parquet",
                    "power_curve_parameters.parquet",
                    "summary_stats.parquet",
                    "combined_power_wind.parquet",
                ],
                Extraction::Matching(&["capacity", "cf"]),
            ),
            catalog_entry(
                DataCategory::DataQuality,
                &[
                    "01_data_foundation_results.parquet",
                    "02_wind_physics_analysis.parquet",
                    "01_comprehensive_eda_results.parquet",
                ],
                Extraction::Matching(&[
                    "missing",
                    "outlier",
                    "quality",
                    "r2",
                    "correlation",
                    "completeness",
                ]),
            ),
            catalog_entry(
                DataCategory::ForecastPerformance,
                &[
                    "07_ml_models_results.parquet",
                    "08_deep_learning_results.parquet",
                    "06_baseline_models_results.parquet",
                    "baseline_modeling_completion.parquet",
                    "07_ml_models_48h_results.parquet",
                    "07_ml_models_presentation_results.parquet",
                ],
                Extraction::Matching(PERFORMANCE_KEYWORDS),
            ),
            catalog_entry(
                DataCategory::TemporalPattern,
                &[
                    "03_temporal_patterns_results.parquet",
                    "03_temporal_features_enriched.parquet",
                ],
                Extraction::Matching(&[
                    "autocorr", "diurnal", "seasonal", "ramp", "lag", "hourly", "trend",
                ]),
            ),
            catalog_entry(
                DataCategory::SpatialAnalysis,
                &[
                    "04_spatial_analysis_results.parquet",
                    "04_spatial_analysis_integrated_results.parquet",
                ],
                Extraction::Matching(&["correlation", "distance", "spatial", "coherence", "cross"]),
            ),
            catalog_entry(
                DataCategory::BusinessImpact,
                &[
                    "12_business_impact_results.parquet",
                    "02_wind_physics_analysis.parquet",
                ],
                Extraction::Matching(BUSINESS_KEYWORDS),
            ),
            catalog_entry(
                DataCategory::Comprehensive,
                &[
                    "01_comprehensive_eda_results.parquet",
                    "01_data_foundation_results.parquet",
                    "summary_stats.parquet",
                ],
                Extraction::Matching(&[
                    "mean", "median", "std", "max", "min", "capacity", "power", "speed",
                ]),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_candidates_in_the_default_catalog() {
        let catalog = CategoryCatalog::default();
        for category in DataCategory::ALL {
            assert!(
                !catalog.files(category).is_empty(),
                "no files for {category}"
            );
        }
        let all = catalog.all_files();
        let mut deduped = all.clone();
        deduped.dedup();
        assert_eq!(all.iter().filter(|f| **f == "02_wind_physics_analysis.parquet").count(), 1);
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn categories_parse_from_loose_names() {
        assert_eq!("power-curve".parse::<DataCategory>().unwrap(), DataCategory::PowerCurve);
        assert_eq!("Business".parse::<DataCategory>().unwrap(), DataCategory::BusinessImpact);
        assert_eq!(
            "comprehensive_results".parse::<DataCategory>().unwrap(),
            DataCategory::Comprehensive
        );
        assert!("weather".parse::<DataCategory>().is_err());
        assert_eq!(DataCategory::ForecastPerformance.section(), "performance_metrics");
    }
}
