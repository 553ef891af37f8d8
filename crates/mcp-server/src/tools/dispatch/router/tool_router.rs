use super::super::WindFarmService;
use super::analysis::{route_built, route_free_text};
use crate::tools::queries;
use crate::tools::schemas::analysis::{
    AnalyzeFeatureImportanceRequest, AnalyzePatternRequest, AnalyzePowerCurvesRequest,
    AssessTemporalPatternsRequest, CalculateBusinessImpactRequest,
    CompareModelArchitecturesRequest, CompareWindFarmsRequest, DiagnoseForecastErrorsRequest,
    EvaluateForecastPerformanceRequest, ExtractNotebookResultsRequest,
    QuantifyUncertaintyRequest, SearchNotebooksRequest, SummarizeWindFarmRequest,
};
use crate::tools::schemas::data::{
    FetchCategoryRequest, GetBusinessMetricsRequest, GetForecastPerformanceRequest,
    GetPowerCurveDataRequest, SearchDataRequest,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router, ErrorData as McpError};

pub(super) fn build_tool_router() -> ToolRouter<WindFarmService> {
    WindFarmService::tool_router()
}

#[tool_router]
impl WindFarmService {
    /// Free-text question → guidance + data.
    #[tool(
        description = "Classify a wind power analysis question, extract farms/horizons/percentages/models, and return combined analysis guidance, a workflow plan and matching values from the pre-computed results. Returns a fallback with alternatives when the question needs a capability that is not available yet."
    )]
    pub async fn analyze_pattern(
        &self,
        Parameters(request): Parameters<AnalyzePatternRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_free_text(self, &request.query, request.pattern_type.as_deref()).await)
    }

    #[tool(
        description = "Power curve characteristics (cut-in, rated and cut-out speed, rated power, capacity factor) for one wind farm or all farms."
    )]
    pub async fn analyze_power_curves(
        &self,
        Parameters(request): Parameters<AnalyzePowerCurvesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::power_curves(&request)).await)
    }

    #[tool(
        description = "Forecast accuracy by model, horizon (1-48 h), metric and wind regime, compared against the persistence baseline."
    )]
    pub async fn evaluate_forecast_performance(
        &self,
        Parameters(request): Parameters<EvaluateForecastPerformanceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::forecast_performance(&request)).await)
    }

    #[tool(
        description = "Diurnal cycles, seasonality, autocorrelation and ramp events in wind generation."
    )]
    pub async fn assess_temporal_patterns(
        &self,
        Parameters(request): Parameters<AssessTemporalPatternsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::temporal_patterns(&request)).await)
    }

    #[tool(
        description = "Prediction intervals and uncertainty growth with horizon at turbine, farm or portfolio level."
    )]
    pub async fn quantify_uncertainty(
        &self,
        Parameters(request): Parameters<QuantifyUncertaintyRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::uncertainty(&request)).await)
    }

    #[tool(
        description = "Economic value and CO2 displacement of a forecast accuracy improvement for a given installed capacity."
    )]
    pub async fn calculate_business_impact(
        &self,
        Parameters(request): Parameters<CalculateBusinessImpactRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::business_impact(&request)).await)
    }

    #[tool(
        description = "Compare forecasting model architectures on accuracy, complexity, training time, inference speed or interpretability."
    )]
    pub async fn compare_model_architectures(
        &self,
        Parameters(request): Parameters<CompareModelArchitecturesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::model_architectures(&request)).await)
    }

    #[tool(description = "Feature importance ranking for a model, optionally by forecast horizon.")]
    pub async fn analyze_feature_importance(
        &self,
        Parameters(request): Parameters<AnalyzeFeatureImportanceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::feature_importance(&request)).await)
    }

    #[tool(
        description = "Systematic forecast error patterns (bias, variance, extreme events) by farm and time period."
    )]
    pub async fn diagnose_forecast_errors(
        &self,
        Parameters(request): Parameters<DiagnoseForecastErrorsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::forecast_errors(&request)).await)
    }

    #[tool(description = "Statistics and capacity factor for one wind farm (default wf1).")]
    pub async fn summarize_wind_farm(
        &self,
        Parameters(request): Parameters<SummarizeWindFarmRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::wind_farm_summary(&request)).await)
    }

    #[tool(description = "Compare capacity factors and performance across wind farms.")]
    pub async fn compare_wind_farms(
        &self,
        Parameters(request): Parameters<CompareWindFarmsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_built(self, queries::wind_farm_comparison(&request)).await)
    }

    #[tool(
        description = "Find the analysis notebooks and patterns relevant to a set of search terms."
    )]
    pub async fn search_notebooks(
        &self,
        Parameters(request): Parameters<SearchNotebooksRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_free_text(self, &request.query, request.analysis_type.as_deref()).await)
    }

    #[tool(description = "Guidance for extracting results from a specific analysis notebook.")]
    pub async fn extract_notebook_results(
        &self,
        Parameters(request): Parameters<ExtractNotebookResultsRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.notebook_path.trim().is_empty() {
            return Ok(super::error::invalid_argument(
                &crate::tools::args::ArgError::Empty("notebook_path"),
            ));
        }
        Ok(route_built(self, queries::notebook_results(&request)).await)
    }

    #[tool(
        description = "Power curve parameters, capacity factors and data quality indicators read directly from the result tables."
    )]
    pub async fn get_power_curve_data(
        &self,
        Parameters(request): Parameters<GetPowerCurveDataRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(super::data::power_curve_data(self, request).await)
    }

    #[tool(
        description = "Forecast metrics (rmse, mae, mape, r2, skill) filtered by model and horizon, plus baseline comparisons."
    )]
    pub async fn get_forecast_performance(
        &self,
        Parameters(request): Parameters<GetForecastPerformanceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(super::data::forecast_performance(self, request).await)
    }

    #[tool(
        description = "CO2 displacement, economic value and grid integration metrics, optionally scaled by an accuracy improvement."
    )]
    pub async fn get_business_metrics(
        &self,
        Parameters(request): Parameters<GetBusinessMetricsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(super::data::business_metrics(self, request).await)
    }

    #[tool(
        description = "Search result tables for terms in column names and text cells, with summary statistics."
    )]
    pub async fn search_data(
        &self,
        Parameters(request): Parameters<SearchDataRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(super::data::search_data(self, request).await)
    }

    #[tool(description = "Presence, size and shape of every result table, grouped by category.")]
    pub async fn get_data_summary(&self) -> Result<CallToolResult, McpError> {
        Ok(super::data::data_summary(self).await)
    }

    #[tool(
        description = "Values for one data category, for a wind farm (identifier lookup) or aggregated across rows."
    )]
    pub async fn fetch_category(
        &self,
        Parameters(request): Parameters<FetchCategoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(super::data::fetch_category(self, request).await)
    }

    #[tool(description = "Wind farm ids, dataset facts and where to start analysing them.")]
    pub async fn list_available_wind_farms(&self) -> Result<CallToolResult, McpError> {
        Ok(super::status::list_wind_farms(self).await)
    }

    #[tool(
        description = "Server version, tools, supported analyses, loaded prompt fragments and feature flags."
    )]
    pub async fn server_status(&self) -> Result<CallToolResult, McpError> {
        Ok(super::status::server_status(self))
    }
}
