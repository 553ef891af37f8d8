//! Static descriptions of the tool surface reported by `server_status`.

/// Every tool the server registers, grouped routed → data → informational.
pub(crate) const TOOL_NAMES: &[&str] = &[
    "analyze_pattern",
    "analyze_power_curves",
    "evaluate_forecast_performance",
    "assess_temporal_patterns",
    "quantify_uncertainty",
    "calculate_business_impact",
    "compare_model_architectures",
    "analyze_feature_importance",
    "diagnose_forecast_errors",
    "summarize_wind_farm",
    "compare_wind_farms",
    "search_notebooks",
    "extract_notebook_results",
    "get_power_curve_data",
    "get_forecast_performance",
    "get_business_metrics",
    "search_data",
    "get_data_summary",
    "fetch_category",
    "list_available_wind_farms",
    "server_status",
];

pub(crate) const CAPABILITIES: &[&str] = &[
    "Automatic query intent detection",
    "Prompt fragment combination",
    "Entity extraction",
    "Multi-intent handling",
    "Feature-availability fallbacks",
    "Direct reads of pre-computed result tables",
    "Domain-specific tool APIs",
];

pub(crate) const SERVER_NAME: &str = "Wind Farm Analytics MCP Server";

pub(crate) const INSTRUCTIONS: &str = "Wind farm analytics guidance over pre-computed results. \
Start with 'analyze_pattern' for free-text questions or a domain tool such as \
'analyze_power_curves' / 'evaluate_forecast_performance'. Use 'fetch_category' and the get_* \
tools for raw values, 'list_available_wind_farms' for ids and 'server_status' for loaded \
prompts and feature flags.";
