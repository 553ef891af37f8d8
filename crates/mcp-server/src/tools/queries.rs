//! Natural-language questions built from domain tool arguments.
//!
//! Each domain tool is a thin wrapper: it phrases its arguments as a question and routes it
//! with a fixed intent, so the same guidance and data attachment logic serves every tool.

use super::schemas::analysis::{
    AnalyzeFeatureImportanceRequest, AnalyzePowerCurvesRequest, AssessTemporalPatternsRequest,
    CalculateBusinessImpactRequest, CompareModelArchitecturesRequest, CompareWindFarmsRequest,
    DiagnoseForecastErrorsRequest, EvaluateForecastPerformanceRequest,
    ExtractNotebookResultsRequest, QuantifyUncertaintyRequest, SummarizeWindFarmRequest,
};
use windfarm_router::Intent;

const DEFAULT_MODELS: &[&str] = &["persistence", "random_forest", "lstm"];
const DEFAULT_CRITERIA: &[&str] = &["accuracy", "complexity"];
const DEFAULT_CONFIDENCE: f64 = 0.95;
const MAX_HORIZON_HOURS: i64 = 48;

/// Question text plus the intent it is routed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedQuery {
    pub query: String,
    pub intent: Intent,
}

impl RoutedQuery {
    fn new(parts: Vec<String>, intent: Intent) -> Self {
        Self {
            query: parts.join(" "),
            intent,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `3` → `wf3`, `WF3` → `wf3`. The `wf` spelling is what users type; extraction maps it to `wp`.
fn farm_label(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.starts_with("wf") {
        lowered
    } else {
        format!("wf{lowered}")
    }
}

fn list_or_default(values: Option<&[String]>, default: &[&str]) -> String {
    match values.filter(|v| !v.is_empty()) {
        Some(values) => values.join(", "),
        None => default.join(", "),
    }
}

pub fn power_curves(req: &AnalyzePowerCurvesRequest) -> RoutedQuery {
    let mut parts = vec!["Analyze power curves".to_string()];
    match non_empty(req.wind_farm.as_deref()) {
        Some(farm) => parts.push(format!("for wind farm {}", farm_label(farm))),
        None => parts.push("for all wind farms".to_string()),
    }
    match req.include_metrics.as_deref().filter(|m| !m.is_empty()) {
        Some(metrics) => parts.push(format!("including {}", metrics.join(", "))),
        None => parts.push("including all standard metrics".to_string()),
    }
    RoutedQuery::new(parts, Intent::PowerCurve)
}

pub fn forecast_performance(req: &EvaluateForecastPerformanceRequest) -> RoutedQuery {
    let mut parts = vec!["Evaluate forecast performance".to_string()];
    if let Some(model) = non_empty(req.model_type.as_deref()) {
        parts.push(format!("for {model} model"));
    }
    match req.forecast_horizon {
        None | Some(0) => {}
        Some(h) if (1..=MAX_HORIZON_HOURS).contains(&h) => {
            parts.push(format!("at {h} hour ahead horizon"));
        }
        Some(_) => parts.push("across all horizons".to_string()),
    }
    let metric = non_empty(req.metric.as_deref()).unwrap_or("RMSE");
    parts.push(format!("using {metric} metric"));
    if let Some(regime) = non_empty(req.wind_regime.as_deref()) {
        parts.push(format!("in {regime} wind conditions"));
    }
    RoutedQuery::new(parts, Intent::Performance)
}

pub fn temporal_patterns(req: &AssessTemporalPatternsRequest) -> RoutedQuery {
    let mut parts = vec!["Analyze temporal patterns".to_string()];
    match non_empty(req.pattern_type.as_deref()).filter(|p| *p != "all") {
        Some(pattern) => parts.push(format!("focusing on {pattern}")),
        None => parts.push("including all temporal characteristics".to_string()),
    }
    let level = non_empty(req.aggregation_level.as_deref()).unwrap_or("hourly");
    parts.push(format!("at {level} resolution"));
    if req.include_seasonality.unwrap_or(true) {
        parts.push("with seasonal decomposition".to_string());
    }
    RoutedQuery::new(parts, Intent::Temporal)
}

/// Confidence outside 0.5..=0.99 falls back to 0.95.
pub fn uncertainty(req: &QuantifyUncertaintyRequest) -> RoutedQuery {
    let confidence = req
        .confidence_level
        .filter(|c| (0.5..=0.99).contains(c))
        .unwrap_or(DEFAULT_CONFIDENCE);
    let horizon = req.forecast_horizon.unwrap_or(24);
    let level = non_empty(req.aggregation_level.as_deref()).unwrap_or("portfolio");
    #[allow(clippy::cast_possible_truncation)]
    let percent = (confidence * 100.0) as i64;
    RoutedQuery::new(
        vec![
            format!("Quantify forecast uncertainty at {percent}% confidence"),
            format!("for {horizon} hour ahead predictions"),
            format!("aggregated at {level} level"),
        ],
        Intent::Uncertainty,
    )
}

/// Improvement is clamped to 0..=100.
pub fn business_impact(req: &CalculateBusinessImpactRequest) -> RoutedQuery {
    let improvement = if req.accuracy_improvement.is_nan() {
        0.0
    } else {
        req.accuracy_improvement.clamp(0.0, 100.0)
    };
    let capacity = req.installed_capacity_mw.unwrap_or(100.0);
    let carbon = req.carbon_intensity.unwrap_or(0.5);
    RoutedQuery::new(
        vec![
            format!("Calculate business impact of {improvement}% forecast improvement"),
            format!("for {capacity}MW wind farm"),
            format!("with {carbon} tons CO2/MWh grid displacement"),
        ],
        Intent::Business,
    )
}

pub fn model_architectures(req: &CompareModelArchitecturesRequest) -> RoutedQuery {
    RoutedQuery::new(
        vec![
            format!("Compare {} models", list_or_default(req.models.as_deref(), DEFAULT_MODELS)),
            format!(
                "based on {}",
                list_or_default(req.comparison_criteria.as_deref(), DEFAULT_CRITERIA)
            ),
        ],
        Intent::Comparison,
    )
}

pub fn feature_importance(req: &AnalyzeFeatureImportanceRequest) -> RoutedQuery {
    let model = non_empty(req.model_type.as_deref()).unwrap_or("ensemble");
    let top_n = req.top_n_features.unwrap_or(10);
    let mut parts = vec![
        format!("Analyze feature importance for {model} model"),
        format!("showing top {top_n} features"),
    ];
    if req.by_horizon.unwrap_or(true) {
        parts.push("broken down by forecast horizon".to_string());
    }
    RoutedQuery::new(parts, Intent::FeatureAnalysis)
}

pub fn forecast_errors(req: &DiagnoseForecastErrorsRequest) -> RoutedQuery {
    let mut parts = vec!["Diagnose forecast errors".to_string()];
    if let Some(kind) = non_empty(req.error_type.as_deref()).filter(|k| *k != "all") {
        parts.push(format!("focusing on {kind}"));
    }
    if let Some(farm) = non_empty(req.wind_farm.as_deref()) {
        parts.push(format!("for {}", farm_label(farm)));
    }
    if let Some(period) = non_empty(req.time_period.as_deref()) {
        parts.push(format!("during {period} periods"));
    }
    RoutedQuery::new(parts, Intent::ErrorAnalysis)
}

pub fn wind_farm_summary(req: &SummarizeWindFarmRequest) -> RoutedQuery {
    let farm = non_empty(req.farm_id.as_deref()).unwrap_or("wf1");
    RoutedQuery::new(
        vec![format!(
            "What are the statistics and capacity factor for wind farm {farm}?"
        )],
        Intent::PowerCurve,
    )
}

pub fn wind_farm_comparison(req: &CompareWindFarmsRequest) -> RoutedQuery {
    let query = match non_empty(req.farm_ids.as_deref()) {
        Some(ids) => format!("Compare capacity factors and performance for wind farms {ids}"),
        None => "Compare capacity factors and performance across all wind farms".to_string(),
    };
    RoutedQuery::new(vec![query], Intent::Comparison)
}

/// Intent is inferred from which analysis notebook the path names.
pub fn notebook_results(req: &ExtractNotebookResultsRequest) -> RoutedQuery {
    let path = req.notebook_path.trim();
    let intent = [
        ("data_foundation", Intent::DataQuality),
        ("wind_physics", Intent::PowerCurve),
        ("model_evaluation", Intent::Performance),
        ("business_impact", Intent::Business),
    ]
    .into_iter()
    .find_map(|(needle, intent)| path.contains(needle).then_some(intent))
    .unwrap_or(Intent::General);
    let result_type = non_empty(req.result_type.as_deref()).unwrap_or("all");
    RoutedQuery::new(
        vec![format!("Extract {result_type} results from {path}")],
        intent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn power_curve_question_names_the_farm() {
        let q = power_curves(&AnalyzePowerCurvesRequest {
            wind_farm: Some(" 3 ".to_string()),
            include_metrics: Some(vec!["capacity_factor".into(), "rated_speed".into()]),
        });
        assert_eq!(
            q.query,
            "Analyze power curves for wind farm wf3 including capacity_factor, rated_speed"
        );
        assert_eq!(q.intent, Intent::PowerCurve);

        let all = power_curves(&AnalyzePowerCurvesRequest::default());
        assert_eq!(
            all.query,
            "Analyze power curves for all wind farms including all standard metrics"
        );
    }

    #[test]
    fn horizon_outside_range_means_all_horizons() {
        let in_range = forecast_performance(&EvaluateForecastPerformanceRequest {
            model_type: Some("xgboost".into()),
            forecast_horizon: Some(24),
            ..Default::default()
        });
        assert_eq!(
            in_range.query,
            "Evaluate forecast performance for xgboost model at 24 hour ahead horizon using RMSE metric"
        );

        let out_of_range = forecast_performance(&EvaluateForecastPerformanceRequest {
            forecast_horizon: Some(72),
            metric: Some("MAE".into()),
            wind_regime: Some("high".into()),
            ..Default::default()
        });
        assert_eq!(
            out_of_range.query,
            "Evaluate forecast performance across all horizons using MAE metric in high wind conditions"
        );
    }

    #[test]
    fn invalid_confidence_uses_default() {
        let q = uncertainty(&QuantifyUncertaintyRequest {
            confidence_level: Some(1.5),
            ..Default::default()
        });
        assert_eq!(
            q.query,
            "Quantify forecast uncertainty at 95% confidence for 24 hour ahead predictions aggregated at portfolio level"
        );

        let ninety = uncertainty(&QuantifyUncertaintyRequest {
            confidence_level: Some(0.9),
            forecast_horizon: Some(12),
            aggregation_level: Some("farm".into()),
        });
        assert!(ninety.query.starts_with("Quantify forecast uncertainty at 90% confidence for 12"));
    }

    #[test]
    fn business_improvement_is_clamped() {
        let q = business_impact(&CalculateBusinessImpactRequest {
            accuracy_improvement: 140.0,
            installed_capacity_mw: None,
            carbon_intensity: None,
        });
        assert_eq!(
            q.query,
            "Calculate business impact of 100% forecast improvement for 100MW wind farm with 0.5 tons CO2/MWh grid displacement"
        );

        let fractional = business_impact(&CalculateBusinessImpactRequest {
            accuracy_improvement: 15.5,
            installed_capacity_mw: Some(250.0),
            carbon_intensity: Some(0.45),
        });
        assert!(fractional.query.contains("15.5% forecast improvement for 250MW"));
    }

    #[test]
    fn comparison_defaults() {
        let q = model_architectures(&CompareModelArchitecturesRequest {
            models: Some(Vec::new()),
            comparison_criteria: None,
        });
        assert_eq!(
            q.query,
            "Compare persistence, random_forest, lstm models based on accuracy, complexity"
        );
        assert_eq!(q.intent, Intent::Comparison);
    }

    #[test]
    fn error_diagnosis_skips_all_and_labels_farm() {
        let q = forecast_errors(&DiagnoseForecastErrorsRequest {
            error_type: Some("all".into()),
            wind_farm: Some("5".into()),
            time_period: Some("winter".into()),
        });
        assert_eq!(q.query, "Diagnose forecast errors for wf5 during winter periods");
    }

    #[test]
    fn notebook_path_picks_the_intent() {
        let q = notebook_results(&ExtractNotebookResultsRequest {
            notebook_path: "notebooks/12_business_impact.ipynb".into(),
            result_type: None,
        });
        assert_eq!(q.intent, Intent::Business);
        assert_eq!(q.query, "Extract all results from notebooks/12_business_impact.ipynb");

        let other = notebook_results(&ExtractNotebookResultsRequest {
            notebook_path: "scratch.ipynb".into(),
            result_type: Some("metrics".into()),
        });
        assert_eq!(other.intent, Intent::General);
    }

    #[test]
    fn legacy_farm_tools() {
        assert_eq!(
            wind_farm_summary(&SummarizeWindFarmRequest::default()).query,
            "What are the statistics and capacity factor for wind farm wf1?"
        );
        assert_eq!(
            wind_farm_comparison(&CompareWindFarmsRequest {
                farm_ids: Some("wf1,wf2".into())
            })
            .query,
            "Compare capacity factors and performance for wind farms wf1,wf2"
        );
    }

    #[test]
    fn temporal_defaults() {
        let q = temporal_patterns(&AssessTemporalPatternsRequest::default());
        assert_eq!(
            q.query,
            "Analyze temporal patterns including all temporal characteristics at hourly resolution with seasonal decomposition"
        );
        let feature = feature_importance(&AnalyzeFeatureImportanceRequest {
            by_horizon: Some(false),
            ..Default::default()
        });
        assert_eq!(
            feature.query,
            "Analyze feature importance for ensemble model showing top 10 features"
        );
    }
}
