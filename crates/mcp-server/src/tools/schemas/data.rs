use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetPowerCurveDataRequest {
    #[schemars(description = "Wind farm id (any form: 'wf3', 'WP3', '3', 'wind farm 3'); omit for all rows")]
    pub wind_farm: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetForecastPerformanceRequest {
    #[schemars(description = "Filter rows whose model column contains this name (case-insensitive)")]
    pub model_type: Option<String>,

    #[schemars(description = "Filter rows whose horizon column equals this value")]
    pub horizon: Option<u32>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetBusinessMetricsRequest {
    #[schemars(description = "Percent improvement used to scale positive metrics (adds scaled_metrics)")]
    pub accuracy_improvement: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDataRequest {
    #[schemars(description = "Terms matched against column names and text cells")]
    pub query_terms: Vec<String>,

    #[schemars(
        description = "Categories to search (default: all): power_curve, capacity_factor, data_quality, forecast_performance, temporal_pattern, spatial_analysis, business_impact, comprehensive"
    )]
    pub data_types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FetchCategoryRequest {
    #[schemars(
        description = "Category: power_curve, capacity_factor, data_quality, forecast_performance, temporal_pattern, spatial_analysis, business_impact, comprehensive"
    )]
    pub category: String,

    #[schemars(description = "Wind farm id; omit to aggregate across rows")]
    pub wind_farm: Option<String>,
}
