use super::super::WindFarmService;
use super::error::{blocking, invalid_argument, value_result};
use crate::tools::args::{intent_override, required};
use crate::tools::queries::RoutedQuery;
use rmcp::model::CallToolResult;
use windfarm_router::Intent;

/// Classify (unless `intent` is forced), assemble guidance and attach data.
pub(in crate::tools::dispatch) async fn route(
    service: &WindFarmService,
    query: String,
    intent: Option<Intent>,
) -> CallToolResult {
    let router = service.query_router().clone();
    match blocking(move || router.analyze(&query, intent).to_value()).await {
        Ok(value) => value_result(value),
        Err(failed) => failed,
    }
}

pub(in crate::tools::dispatch) async fn route_built(
    service: &WindFarmService,
    built: RoutedQuery,
) -> CallToolResult {
    route(service, built.query, Some(built.intent)).await
}

/// Free-text entry point shared by `analyze_pattern` and `search_notebooks`.
pub(in crate::tools::dispatch) async fn route_free_text(
    service: &WindFarmService,
    query: &str,
    pattern_type: Option<&str>,
) -> CallToolResult {
    let query = match required("query", query) {
        Ok(query) => query.to_string(),
        Err(err) => return invalid_argument(&err),
    };
    match intent_override(pattern_type) {
        Ok(intent) => route(service, query, intent).await,
        Err(err) => invalid_argument(&err),
    }
}
