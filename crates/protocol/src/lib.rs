use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SERVER_STATUS_SCHEMA_VERSION: u32 = 1;

/// Outcome of a routed request, reported at the top level of every payload.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    Fallback,
    Error,
}

impl ResponseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Fallback => "fallback",
            Self::Error => "error",
        }
    }
}

/// How the router decided to answer a query.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Normal template guidance plus direct data values.
    Guided,
    /// The query asked for a capability flagged unavailable in configuration.
    FeatureUnavailable,
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ToolNextAction {
    pub tool: String,
    pub args: serde_json::Value,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
    #[serde(default)]
    pub next_actions: Vec<ToolNextAction>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
            next_actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_next_action(mut self, action: ToolNextAction) -> Self {
        self.next_actions.push(action);
        self
    }
}

/// Static facts about the dataset the pre-computed analytics were built from.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct DatasetInfo {
    pub name: String,
    pub period: String,
    pub forecast_horizons: String,
}

impl Default for DatasetInfo {
    fn default() -> Self {
        Self {
            name: "GEF2012 Wind Forecasting Competition".to_string(),
            period: "July 2009 - December 2010".to_string(),
            forecast_horizons: "1-48 hours".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ServerIdentity {
    pub name: String,
    pub version: String,
}
