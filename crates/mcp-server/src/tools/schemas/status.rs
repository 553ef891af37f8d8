use serde::Serialize;
use std::collections::BTreeMap;
use windfarm_protocol::{DatasetInfo, ServerIdentity};

#[derive(Debug, Serialize)]
pub struct ServerStatus {
    pub schema_version: u32,
    #[serde(flatten)]
    pub server: ServerIdentity,
    pub status: &'static str,
    pub capabilities: Vec<&'static str>,
    pub available_tools: Vec<&'static str>,
    pub supported_analyses: Vec<&'static str>,
    pub notebook_coverage: Vec<&'static str>,
    pub prompt_files_loaded: Vec<&'static str>,
    pub features: BTreeMap<String, bool>,
    pub data_dir: String,
    pub timestamp_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct WindFarmListing {
    pub wind_farms: Vec<String>,
    /// Farms with at least one identifier-column row in the data directory.
    pub farms_with_data: Vec<String>,
    pub dataset: DatasetInfo,
    pub guidance: ListingGuidance,
}

#[derive(Debug, Serialize)]
pub struct ListingGuidance {
    pub notebooks_to_examine: Vec<&'static str>,
    pub key_metrics: Vec<&'static str>,
    pub analysis_prompt: String,
}
