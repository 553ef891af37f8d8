use super::super::WindFarmService;
use super::error::{blocking, json_result};
use crate::tools::catalog::{CAPABILITIES, SERVER_NAME, TOOL_NAMES};
use crate::tools::schemas::status::{ListingGuidance, ServerStatus, WindFarmListing};
use crate::tools::util::unix_ms;
use rmcp::model::CallToolResult;
use std::time::SystemTime;
use windfarm_data::known_farms;
use windfarm_protocol::{DatasetInfo, ServerIdentity, SERVER_STATUS_SCHEMA_VERSION};
use windfarm_router::{Intent, TemplateKey, NOTEBOOK_COVERAGE};

pub(in crate::tools::dispatch) fn server_status(service: &WindFarmService) -> CallToolResult {
    let router = service.query_router();
    let status = ServerStatus {
        schema_version: SERVER_STATUS_SCHEMA_VERSION,
        server: ServerIdentity {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        status: "operational",
        capabilities: CAPABILITIES.to_vec(),
        available_tools: TOOL_NAMES.to_vec(),
        supported_analyses: Intent::ALL.iter().map(|i| i.as_str()).collect(),
        notebook_coverage: NOTEBOOK_COVERAGE.to_vec(),
        prompt_files_loaded: router.templates().loaded_names(),
        features: router.config().features.clone(),
        data_dir: router.reader().data_dir().display().to_string(),
        timestamp_ms: unix_ms(SystemTime::now()),
    };
    json_result(&status, "server_status")
}

pub(in crate::tools::dispatch) async fn list_wind_farms(
    service: &WindFarmService,
) -> CallToolResult {
    let router = service.query_router().clone();
    let farms_with_data = match blocking(move || router.reader().available_wind_farms()).await {
        Ok(farms) => farms,
        Err(failed) => return failed,
    };
    let listing = WindFarmListing {
        wind_farms: known_farms(),
        farms_with_data,
        dataset: DatasetInfo::default(),
        guidance: ListingGuidance {
            notebooks_to_examine: vec!["01_data_foundation.ipynb", "02_wind_physics_analysis.ipynb"],
            key_metrics: vec!["capacity_factor", "cut_in_speed", "rated_power", "data_quality"],
            analysis_prompt: service
                .query_router()
                .templates()
                .get(TemplateKey::PowerCurveAnalysis),
        },
    };
    json_result(&listing, "list_available_wind_farms")
}
