//! Argument parsing shared by the tool handlers.

use thiserror::Error;
use windfarm_data::DataCategory;
use windfarm_protocol::ErrorEnvelope;
use windfarm_router::Intent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("`{0}` must not be empty")]
    Empty(&'static str),

    #[error("unknown analysis type '{0}'")]
    UnknownIntent(String),

    #[error("unknown data category '{0}'")]
    UnknownCategory(String),
}

impl ArgError {
    pub fn envelope(&self) -> ErrorEnvelope {
        let envelope = ErrorEnvelope::new("invalid_request", self.to_string());
        match self {
            Self::Empty(_) => envelope,
            Self::UnknownIntent(_) => envelope.with_hint(format!(
                "valid values: {}",
                Intent::ALL.map(Intent::as_str).join(", ")
            )),
            Self::UnknownCategory(_) => envelope.with_hint(format!(
                "valid values: {}",
                DataCategory::ALL.map(DataCategory::as_str).join(", ")
            )),
        }
    }
}

pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ArgError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ArgError::Empty(field));
    }
    Ok(value)
}

/// `None`, blank and `general` all mean "classify the query".
pub fn intent_override(raw: Option<&str>) -> Result<Option<Intent>, ArgError> {
    match super::util::trimmed(raw) {
        None => Ok(None),
        Some(value) => value
            .parse::<Intent>()
            .map(|intent| (intent != Intent::General).then_some(intent))
            .map_err(|_| ArgError::UnknownIntent(value.to_string())),
    }
}

pub fn category(raw: &str) -> Result<DataCategory, ArgError> {
    raw.parse::<DataCategory>()
        .map_err(|_| ArgError::UnknownCategory(raw.trim().to_string()))
}

/// Every category when the list is absent or empty.
pub fn categories(raw: Option<&[String]>) -> Result<Vec<DataCategory>, ArgError> {
    match raw.filter(|list| !list.is_empty()) {
        None => Ok(DataCategory::ALL.to_vec()),
        Some(list) => list.iter().map(|value| category(value)).collect(),
    }
}
