//! Feature gating.
//!
//! Some capabilities are advertised before the artifacts behind them exist. A gate names
//! the feature flag and the phrases that ask for it; when a query trips a gate whose flag
//! is `false`, the router answers with substitutes instead of the normal guidance.

use crate::config::ProjectConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use windfarm_protocol::{ResponseStatus, RoutingDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateRule {
    pub feature: &'static str,
    pub capability: &'static str,
    /// Lower-case phrases matched by substring against the lower-cased query.
    pub triggers: &'static [&'static str],
    /// Preferred substitute models, looked up in `model_performance`.
    pub alternatives: &'static [&'static str],
    pub suggested_tools: &'static [&'static str],
}

pub const DEFAULT_GATES: &[GateRule] = &[
    GateRule {
        feature: "ensemble_predictions",
        capability: "ensemble modeling",
        triggers: &["ensemble"],
        alternatives: &["xgboost", "random_forest", "lstm"],
        suggested_tools: &["evaluate_forecast_performance", "compare_model_architectures"],
    },
    GateRule {
        feature: "uncertainty_quantification",
        capability: "uncertainty quantification",
        triggers: &[
            "uncertainty",
            "prediction interval",
            "confidence interval",
            "quantile",
        ],
        alternatives: &["xgboost", "random_forest"],
        suggested_tools: &["evaluate_forecast_performance", "diagnose_forecast_errors"],
    },
    GateRule {
        feature: "comprehensive_evaluation",
        capability: "comprehensive production evaluation",
        triggers: &["comprehensive evaluation", "production", "final evaluation"],
        alternatives: &["xgboost", "lstm", "random_forest", "persistence"],
        suggested_tools: &["evaluate_forecast_performance", "get_forecast_performance"],
    },
];

impl GateRule {
    #[must_use]
    pub fn triggered_by(&self, lowered_query: &str) -> bool {
        self.triggers.iter().any(|t| lowered_query.contains(t))
    }
}

/// First gate the query trips whose feature is flagged unavailable.
#[must_use]
pub fn closed_gate<'r>(
    query: &str,
    config: &ProjectConfig,
    rules: &'r [GateRule],
) -> Option<&'r GateRule> {
    let lowered = query.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.triggered_by(&lowered) && !config.feature_available(rule.feature))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub model: String,
    pub metrics: BTreeMap<String, f64>,
}

/// Returned in place of guidance when a query asks for an unavailable capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackPayload {
    pub status: ResponseStatus,
    pub routing_decision: RoutingDecision,
    pub feature: String,
    pub message: String,
    pub alternatives: Vec<Alternative>,
    pub suggested_tools: Vec<String>,
}

impl FallbackPayload {
    /// Alternatives come from the rule's preferred models that have numeric metrics in
    /// `config`; when none do, every configured model with metrics is offered.
    #[must_use]
    pub fn build(rule: &GateRule, config: &ProjectConfig) -> Self {
        let mut alternatives: Vec<Alternative> = rule
            .alternatives
            .iter()
            .filter_map(|model| {
                let metrics = config.model_metrics(model);
                (!metrics.is_empty()).then(|| Alternative {
                    model: (*model).to_string(),
                    metrics,
                })
            })
            .collect();
        if alternatives.is_empty() {
            alternatives = config
                .models_with_metrics()
                .into_iter()
                .map(|model| Alternative {
                    model: model.to_string(),
                    metrics: config.model_metrics(model),
                })
                .collect();
        }

        let message = match alternatives.first() {
            Some(best) => format!(
                "{} is not available yet ({} is disabled). Use {} or the other listed alternatives.",
                capitalize(rule.capability),
                rule.feature,
                best.model
            ),
            None => format!(
                "{} is not available yet ({} is disabled) and no reference metrics are configured.",
                capitalize(rule.capability),
                rule.feature
            ),
        };

        Self {
            status: ResponseStatus::Fallback,
            routing_decision: RoutingDecision::FeatureUnavailable,
            feature: rule.feature.to_string(),
            message,
            alternatives,
            suggested_tools: rule.suggested_tools.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config(raw: &str) -> ProjectConfig {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn disabled_ensemble_trips_its_gate() {
        let cfg = config(
            r#"{"features": {"ensemble_predictions": false},
                "model_performance": {"xgboost": {"rmse": 0.142, "mae": 0.098}}}"#,
        );
        let rule = closed_gate("What is the RMSE of the Ensemble model?", &cfg, DEFAULT_GATES)
            .expect("gate should close");
        assert_eq!(rule.feature, "ensemble_predictions");

        let payload = serde_json::to_value(FallbackPayload::build(rule, &cfg)).unwrap();
        assert_eq!(payload["status"], json!("fallback"));
        assert_eq!(payload["routing_decision"], json!("feature_unavailable"));
        assert_eq!(payload["alternatives"][0]["model"], json!("xgboost"));
        assert_eq!(payload["alternatives"][0]["metrics"]["rmse"], json!(0.142));
    }

    #[test]
    fn enabled_or_unlisted_features_pass() {
        let enabled = config(r#"{"features": {"ensemble_predictions": true}}"#);
        assert!(closed_gate("ensemble rmse", &enabled, DEFAULT_GATES).is_none());
        assert!(closed_gate("ensemble rmse", &ProjectConfig::default(), DEFAULT_GATES).is_none());
    }

    #[test]
    fn unrelated_queries_never_trip_a_closed_gate() {
        let cfg = config(r#"{"features": {"ensemble_predictions": false}}"#);
        assert!(closed_gate("capacity factor of wf1", &cfg, DEFAULT_GATES).is_none());
    }

    #[test]
    fn alternatives_fall_back_to_any_configured_model() {
        let cfg = config(
            r#"{"features": {"uncertainty_quantification": false},
                "model_performance": {"persistence": {"rmse": 0.25}}}"#,
        );
        let rule = closed_gate("show the 90% prediction interval", &cfg, DEFAULT_GATES).unwrap();
        let payload = FallbackPayload::build(rule, &cfg);
        assert_eq!(payload.alternatives.len(), 1);
        assert_eq!(payload.alternatives[0].model, "persistence");
        assert!(payload.message.starts_with("Uncertainty quantification is not available"));
    }

    #[test]
    fn gating_is_deterministic() {
        let cfg = config(
            r#"{"features": {"ensemble_predictions": false},
                "model_performance": {"lstm": {"rmse": 0.16}}}"#,
        );
        let first = closed_gate("ensemble", &cfg, DEFAULT_GATES).map(|r| FallbackPayload::build(r, &cfg));
        let second = closed_gate("ensemble", &cfg, DEFAULT_GATES).map(|r| FallbackPayload::build(r, &cfg));
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
