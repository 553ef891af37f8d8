use super::super::WindFarmService;
use super::error::{blocking, invalid_argument, json_result, value_result};
use crate::tools::args::{categories, category, ArgError};
use crate::tools::schemas::data::{
    FetchCategoryRequest, GetBusinessMetricsRequest, GetForecastPerformanceRequest,
    GetPowerCurveDataRequest, SearchDataRequest,
};
use crate::tools::util::trimmed;
use rmcp::model::CallToolResult;

fn owned(value: Option<&str>) -> Option<String> {
    trimmed(value).map(str::to_string)
}

pub(in crate::tools::dispatch) async fn power_curve_data(
    service: &WindFarmService,
    request: GetPowerCurveDataRequest,
) -> CallToolResult {
    let router = service.query_router().clone();
    let farm = owned(request.wind_farm.as_deref());
    match blocking(move || router.reader().power_curve_data(farm.as_deref())).await {
        Ok(report) => json_result(&report, "get_power_curve_data"),
        Err(failed) => failed,
    }
}

pub(in crate::tools::dispatch) async fn forecast_performance(
    service: &WindFarmService,
    request: GetForecastPerformanceRequest,
) -> CallToolResult {
    let router = service.query_router().clone();
    let model = owned(request.model_type.as_deref());
    let horizon = request.horizon;
    match blocking(move || router.reader().forecast_performance(model.as_deref(), horizon)).await {
        Ok(report) => json_result(&report, "get_forecast_performance"),
        Err(failed) => failed,
    }
}

pub(in crate::tools::dispatch) async fn business_metrics(
    service: &WindFarmService,
    request: GetBusinessMetricsRequest,
) -> CallToolResult {
    let router = service.query_router().clone();
    let improvement = request.accuracy_improvement.filter(|v| v.is_finite());
    match blocking(move || router.reader().business_metrics(improvement)).await {
        Ok(report) => json_result(&report, "get_business_metrics"),
        Err(failed) => failed,
    }
}

pub(in crate::tools::dispatch) async fn search_data(
    service: &WindFarmService,
    request: SearchDataRequest,
) -> CallToolResult {
    let terms: Vec<String> = request
        .query_terms
        .iter()
        .filter_map(|term| trimmed(Some(term)))
        .map(str::to_string)
        .collect();
    if terms.is_empty() {
        return invalid_argument(&ArgError::Empty("query_terms"));
    }
    let scope = match categories(request.data_types.as_deref()) {
        Ok(scope) => scope,
        Err(err) => return invalid_argument(&err),
    };
    let router = service.query_router().clone();
    match blocking(move || router.reader().search(&terms, &scope)).await {
        Ok(report) => json_result(&report, "search_data"),
        Err(failed) => failed,
    }
}

pub(in crate::tools::dispatch) async fn data_summary(service: &WindFarmService) -> CallToolResult {
    let router = service.query_router().clone();
    match blocking(move || router.reader().data_summary()).await {
        Ok(summary) => json_result(&summary, "get_data_summary"),
        Err(failed) => failed,
    }
}

pub(in crate::tools::dispatch) async fn fetch_category(
    service: &WindFarmService,
    request: FetchCategoryRequest,
) -> CallToolResult {
    let category = match category(&request.category) {
        Ok(category) => category,
        Err(err) => return invalid_argument(&err),
    };
    let router = service.query_router().clone();
    let farm = owned(request.wind_farm.as_deref());
    match blocking(move || router.reader().fetch(category, farm.as_deref()).to_value()).await {
        Ok(value) => value_result(value),
        Err(failed) => failed,
    }
}
