use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzePatternRequest {
    /// Free-text analysis question
    #[schemars(description = "Analysis question in plain language, e.g. 'What is the RMSE of xgboost at 24 hours?'")]
    pub query: String,

    /// Intent override; "general" (default) auto-detects
    #[schemars(
        description = "Analysis type: general (auto-detect, default), performance, power_curve, temporal, business, uncertainty, error_analysis, comparison, data_quality, feature_analysis"
    )]
    pub pattern_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AnalyzePowerCurvesRequest {
    #[schemars(description = "Wind farm id (e.g. 'wf1', 'wp3', '3'); omit for all farms")]
    pub wind_farm: Option<String>,

    #[schemars(
        description = "Metrics to include: capacity_factor, cut_in_speed, rated_speed, cut_out_speed, power_coefficient"
    )]
    pub include_metrics: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct EvaluateForecastPerformanceRequest {
    #[schemars(description = "Model: persistence, random_forest, xgboost, lstm, ensemble")]
    pub model_type: Option<String>,

    #[schemars(description = "Hours ahead (1-48); other values mean all horizons")]
    pub forecast_horizon: Option<i64>,

    #[schemars(description = "Metric: RMSE (default), MAE, MAPE, skill_score")]
    pub metric: Option<String>,

    #[schemars(description = "Wind regime filter: low, medium, high")]
    pub wind_regime: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AssessTemporalPatternsRequest {
    #[schemars(description = "Pattern: diurnal, seasonal, ramp_events, autocorrelation, all (default)")]
    pub pattern_type: Option<String>,

    #[schemars(description = "Resolution: hourly (default), daily, monthly")]
    pub aggregation_level: Option<String>,

    #[schemars(description = "Include seasonal decomposition (default: true)")]
    pub include_seasonality: Option<bool>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct QuantifyUncertaintyRequest {
    #[schemars(description = "Interval confidence level 0.5-0.99 (default 0.95; out of range falls back to 0.95)")]
    pub confidence_level: Option<f64>,

    #[schemars(description = "Hours ahead (default 24)")]
    pub forecast_horizon: Option<i64>,

    #[schemars(description = "Aggregation: turbine, farm, portfolio (default)")]
    pub aggregation_level: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBusinessImpactRequest {
    #[schemars(description = "Forecast accuracy improvement in percent (clamped to 0-100)")]
    pub accuracy_improvement: f64,

    #[schemars(description = "Installed capacity in MW (default 100)")]
    pub installed_capacity_mw: Option<f64>,

    #[schemars(description = "Grid carbon intensity in tons CO2/MWh (default 0.5)")]
    pub carbon_intensity: Option<f64>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CompareModelArchitecturesRequest {
    #[schemars(description = "Models to compare (default: persistence, random_forest, lstm)")]
    pub models: Option<Vec<String>>,

    #[schemars(
        description = "Criteria: accuracy, complexity, training_time, inference_speed, interpretability (default: accuracy, complexity)"
    )]
    pub comparison_criteria: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeFeatureImportanceRequest {
    #[schemars(description = "Model: random_forest, xgboost, ensemble (default)")]
    pub model_type: Option<String>,

    #[schemars(description = "Number of top features (default 10)")]
    pub top_n_features: Option<u32>,

    #[schemars(description = "Break importance down by forecast horizon (default: true)")]
    pub by_horizon: Option<bool>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct DiagnoseForecastErrorsRequest {
    #[schemars(description = "Error type: bias, variance, extreme_events, seasonal, all (default)")]
    pub error_type: Option<String>,

    #[schemars(description = "Wind farm id; omit for the whole portfolio")]
    pub wind_farm: Option<String>,

    #[schemars(description = "Period: morning, afternoon, night, summer, winter")]
    pub time_period: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SummarizeWindFarmRequest {
    #[schemars(description = "Wind farm id wf1-wf7 (default wf1)")]
    pub farm_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CompareWindFarmsRequest {
    #[schemars(description = "Comma-separated farm ids, e.g. 'wf1,wf2,wf3'; omit for all farms")]
    pub farm_ids: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchNotebooksRequest {
    #[schemars(description = "Search terms")]
    pub query: String,

    #[schemars(description = "Optional analysis type hint (same values as analyze_pattern.pattern_type)")]
    pub analysis_type: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExtractNotebookResultsRequest {
    #[schemars(description = "Notebook path, e.g. '02_wind_physics_analysis.ipynb'")]
    pub notebook_path: String,

    #[schemars(description = "Result type: dataframe, metrics, all (default)")]
    pub result_type: Option<String>,
}
