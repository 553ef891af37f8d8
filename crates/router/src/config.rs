use crate::error::{Result, RouterError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Project status document: artifact completion, feature flags and reference metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub completion: BTreeMap<String, bool>,
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
    /// Model name → metric name → value. Only numeric values are used as metrics.
    #[serde(default)]
    pub model_performance: BTreeMap<String, Value>,
}

impl ProjectConfig {
    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| RouterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &raw)
    }

    fn parse(path: &Path, raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| RouterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the document, degrading to empty defaults when it is absent or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::warn!(
                "Project configuration not found: {} (every feature counts as available)",
                path.display()
            );
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => {
                log::info!(
                    "Loaded project configuration: {} feature flags, {} model entries",
                    config.features.len(),
                    config.model_performance.len()
                );
                config
            }
            Err(err) => {
                log::error!("{err}");
                Self::default()
            }
        }
    }

    /// A flag missing from the document counts as available.
    #[must_use]
    pub fn feature_available(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(true)
    }

    /// Numeric metrics recorded for `model`, empty when unknown.
    #[must_use]
    pub fn model_metrics(&self, model: &str) -> BTreeMap<String, f64> {
        let Some(Value::Object(metrics)) = self.model_performance.get(model) else {
            return BTreeMap::new();
        };
        metrics
            .iter()
            .filter_map(|(name, value)| value.as_f64().map(|v| (name.clone(), v)))
            .collect()
    }

    /// Models that have at least one numeric metric, in name order.
    #[must_use]
    pub fn models_with_metrics(&self) -> Vec<&str> {
        self.model_performance
            .keys()
            .filter(|model| !self.model_metrics(model).is_empty())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_flags_count_as_available() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{"features": {"ensemble_predictions": false, "lstm": true}}"#,
        )
        .unwrap();
        assert!(!config.feature_available("ensemble_predictions"));
        assert!(config.feature_available("lstm"));
        assert!(config.feature_available("never_mentioned"));
        assert!(config.completion.is_empty());
    }

    #[test]
    fn only_numeric_metrics_are_reported() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{"model_performance": {
                "xgboost": {"rmse": 0.142, "mae": 0.098, "notes": "tuned"},
                "draft": "pending",
                "lstm": {"status": "training"}
            }}"#,
        )
        .unwrap();
        let metrics = config.model_metrics("xgboost");
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics["rmse"], 0.142);
        assert!(config.model_metrics("draft").is_empty());
        assert_eq!(config.models_with_metrics(), vec!["xgboost"]);
    }

    #[test]
    fn missing_or_malformed_files_degrade_to_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(
            ProjectConfig::load(&dir.path().join("absent.json")),
            ProjectConfig::default()
        );

        let broken = dir.path().join("project_status.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            ProjectConfig::try_load(&broken),
            Err(RouterError::Config { .. })
        ));
        assert_eq!(ProjectConfig::load(&broken), ProjectConfig::default());
    }
}
