use crate::assemble::{Assembly, ResponseAssembler};
use crate::config::ProjectConfig;
use crate::entities::{EntityExtractor, ExtractedEntities};
use crate::error::Result;
use crate::gating::FallbackPayload;
use crate::intent::{Intent, IntentTable};
use crate::settings::Settings;
use crate::templates::TemplateStore;
use crate::workflow::{plan, WorkflowStep};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use windfarm_data::{DataCategory, DataReader};
use windfarm_protocol::{ResponseStatus, RoutingDecision};

const RESPONSE_STRUCTURE: &str = "Follow the template in analysis_prompt";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guidance {
    pub primary_focus: Intent,
    pub notebooks_to_examine: Vec<String>,
    pub key_patterns_to_find: Vec<String>,
    pub response_structure: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidedResponse {
    pub status: ResponseStatus,
    pub routing_decision: RoutingDecision,
    pub query: String,
    pub detected_intents: Vec<Intent>,
    pub extracted_entities: ExtractedEntities,
    pub analysis_prompt: String,
    pub workflow_steps: Vec<WorkflowStep>,
    pub recommended_notebooks: Vec<String>,
    pub guidance: Guidance,
    /// Fetch results keyed by category name.
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackResponse {
    #[serde(flatten)]
    pub payload: FallbackPayload,
    pub query: String,
    pub detected_intents: Vec<Intent>,
    pub extracted_entities: ExtractedEntities,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoutedResponse {
    Guided(Box<GuidedResponse>),
    Fallback(FallbackResponse),
}

impl RoutedResponse {
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        match self {
            Self::Guided(r) => r.status,
            Self::Fallback(r) => r.payload.status,
        }
    }

    #[must_use]
    pub fn detected_intents(&self) -> &[Intent] {
        match self {
            Self::Guided(r) => &r.detected_intents,
            Self::Fallback(r) => &r.detected_intents,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Data categories consulted for each intent.
#[must_use]
pub fn categories_for(intent: Intent) -> &'static [DataCategory] {
    match intent {
        Intent::PowerCurve => &[DataCategory::PowerCurve, DataCategory::CapacityFactor],
        Intent::Performance | Intent::Comparison | Intent::ErrorAnalysis => {
            &[DataCategory::ForecastPerformance]
        }
        Intent::Temporal => &[DataCategory::TemporalPattern],
        Intent::Business => &[DataCategory::BusinessImpact],
        Intent::DataQuality => &[DataCategory::DataQuality],
        Intent::General => &[DataCategory::Comprehensive],
        Intent::Uncertainty | Intent::FeatureAnalysis => &[],
    }
}

/// Classify → extract → gate/assemble → attach data.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    table: IntentTable,
    extractor: EntityExtractor,
    assembler: ResponseAssembler,
    config: ProjectConfig,
    reader: Arc<DataReader>,
}

impl QueryRouter {
    /// Build from on-disk locations. Missing templates or config degrade to defaults.
    pub fn new(settings: &Settings) -> Result<Self> {
        let templates = TemplateStore::load(&settings.prompts_dir);
        let config = ProjectConfig::load(&settings.config_path);
        let reader = Arc::new(DataReader::new(&settings.data_dir));
        let router = Self::from_parts(
            IntentTable::default(),
            EntityExtractor::new()?,
            ResponseAssembler::new(templates),
            config,
            reader,
        );
        log::info!(
            "Query router ready: {} prompt fragments, data dir {}",
            router.templates().loaded_names().len(),
            settings.data_dir.display()
        );
        Ok(router)
    }

    #[must_use]
    pub fn from_parts(
        table: IntentTable,
        extractor: EntityExtractor,
        assembler: ResponseAssembler,
        config: ProjectConfig,
        reader: Arc<DataReader>,
    ) -> Self {
        Self {
            table,
            extractor,
            assembler,
            config,
            reader,
        }
    }

    #[must_use]
    pub fn intent_table(&self) -> &IntentTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    #[must_use]
    pub fn reader(&self) -> &Arc<DataReader> {
        &self.reader
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateStore {
        self.assembler.templates()
    }

    #[must_use]
    pub fn classify(&self, query: &str) -> Vec<Intent> {
        self.table.classify(query)
    }

    #[must_use]
    pub fn extract(&self, query: &str) -> ExtractedEntities {
        self.extractor.extract(query)
    }

    /// Route a query. `forced` skips classification, as the domain tools do.
    #[must_use]
    pub fn analyze(&self, query: &str, forced: Option<Intent>) -> RoutedResponse {
        log::info!("Pattern analysis request: {query}");
        let intents = match forced {
            Some(Intent::General) | None => self.classify(query),
            Some(intent) => vec![intent],
        };
        let entities = self.extract(query);

        match self
            .assembler
            .assemble(query, &intents, &entities, &self.config)
        {
            Assembly::Fallback(payload) => RoutedResponse::Fallback(FallbackResponse {
                payload,
                query: query.to_string(),
                detected_intents: intents,
                extracted_entities: entities,
            }),
            Assembly::Guided(analysis_prompt) => {
                let workflow = plan(&intents);
                let data = self.attach_data(&intents, &entities);
                RoutedResponse::Guided(Box::new(GuidedResponse {
                    status: ResponseStatus::Ok,
                    routing_decision: RoutingDecision::Guided,
                    query: query.to_string(),
                    guidance: Guidance {
                        primary_focus: intents.first().copied().unwrap_or(Intent::General),
                        notebooks_to_examine: workflow.recommended_notebooks.clone(),
                        key_patterns_to_find: workflow.key_patterns,
                        response_structure: RESPONSE_STRUCTURE,
                    },
                    detected_intents: intents,
                    extracted_entities: entities,
                    analysis_prompt,
                    workflow_steps: workflow.steps,
                    recommended_notebooks: workflow.recommended_notebooks,
                    data,
                }))
            }
        }
    }

    fn attach_data(&self, intents: &[Intent], entities: &ExtractedEntities) -> Map<String, Value> {
        let farm = entities.wind_farms.first().map(String::as_str);
        let mut seen: Vec<DataCategory> = Vec::new();
        let mut data = Map::new();
        for category in intents.iter().flat_map(|i| categories_for(*i).iter().copied()) {
            if seen.contains(&category) {
                continue;
            }
            seen.push(category);
            let result = self.reader.fetch(category, farm);
            data.insert(category.as_str().to_string(), result.to_value());
        }
        data
    }
}
