//! # Wind Farm Router
//!
//! Turns a natural-language question into analysis guidance.
//!
//! ```text
//! query ──> IntentTable::classify ──┐
//!       └─> EntityExtractor::extract ┴─> ResponseAssembler
//!                                          │  closed gate? ──> FallbackPayload
//!                                          └─ guidance doc + workflow plan + DataReader::fetch
//! ```

mod assemble;
mod config;
mod entities;
mod error;
mod gating;
mod intent;
mod router;
mod settings;
mod templates;
mod workflow;

pub use assemble::{Assembly, ResponseAssembler};
pub use config::ProjectConfig;
pub use entities::{EntityExtractor, ExtractedEntities, KNOWN_MODELS};
pub use error::{Result, RouterError};
pub use gating::{closed_gate, Alternative, FallbackPayload, GateRule, DEFAULT_GATES};
pub use intent::{Intent, IntentTable};
pub use router::{
    categories_for, FallbackResponse, Guidance, GuidedResponse, QueryRouter, RoutedResponse,
};
pub use settings::{
    Settings, CONFIG_ENV, CONFIG_FILENAME, DATA_DIR_ENV, DEFAULT_DATA_DIR, DEFAULT_PROMPTS_DIR,
    PROMPTS_DIR_ENV,
};
pub use templates::{TemplateKey, TemplateStore};
pub use workflow::{plan, WorkflowPlan, WorkflowStep, NOTEBOOK_COVERAGE};
