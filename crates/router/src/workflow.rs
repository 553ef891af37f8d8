//! Which upstream analysis artifacts to consult for each intent.

use crate::intent::Intent;
use serde::Serialize;

/// Analysis notebooks whose outputs back the processed data directory.
pub const NOTEBOOK_COVERAGE: &[&str] = &[
    "01_data_foundation.ipynb",
    "02_wind_physics_analysis.ipynb",
    "03_temporal_patterns.ipynb",
    "04_spatial_analysis.ipynb",
    "05_feature_engineering.ipynb",
    "06_baseline_models.ipynb",
    "07_ml_models.ipynb",
    "08_deep_learning.ipynb",
    "09_ensemble_uncertainty.ipynb",
    "10_model_evaluation.ipynb",
    "11_mcp_service.ipynb",
    "12_business_impact.ipynb",
];

#[derive(Debug, Clone, Copy)]
struct StepTemplate {
    intent: Intent,
    action: &'static str,
    notebooks: &'static [&'static str],
    /// Notebooks added to the recommendation list (a subset of `notebooks`).
    recommend: &'static [&'static str],
    look_for: &'static [&'static str],
    extract: &'static str,
    key_patterns: &'static [&'static str],
}

// Steps are emitted in this order regardless of intent order.
const STEPS: &[StepTemplate] = &[
    StepTemplate {
        intent: Intent::PowerCurve,
        action: "Analyze power curve characteristics",
        notebooks: &["02_wind_physics_analysis.ipynb"],
        recommend: &["02_wind_physics_analysis.ipynb"],
        look_for: &["power_curve", "capacity_factor", "cut_in_speed"],
        extract: "Turbine operational parameters",
        key_patterns: &["groupby", "capacity_factor", "power_curve", "cut_in_speed"],
    },
    StepTemplate {
        intent: Intent::Performance,
        action: "Evaluate forecast performance",
        notebooks: &["10_model_evaluation.ipynb", "06_baseline_models.ipynb"],
        recommend: &["10_model_evaluation.ipynb"],
        look_for: &["rmse", "mae", "model_comparison"],
        extract: "Performance metrics by model and horizon",
        key_patterns: &["rmse", "mae", "model.evaluate", "test_results"],
    },
    StepTemplate {
        intent: Intent::Business,
        action: "Calculate business impact",
        notebooks: &["12_business_impact.ipynb"],
        recommend: &["12_business_impact.ipynb"],
        look_for: &["co2_displacement", "economic_value"],
        extract: "Environmental and economic benefits",
        key_patterns: &["co2_displacement", "economic_value", "annual_generation"],
    },
    StepTemplate {
        intent: Intent::DataQuality,
        action: "Assess data quality",
        notebooks: &["01_data_foundation.ipynb"],
        recommend: &["01_data_foundation.ipynb"],
        look_for: &["missing_values", "outliers", "data_quality"],
        extract: "Data completeness and quality metrics",
        key_patterns: &["missing_values", "outliers", "describe()", "info()"],
    },
    StepTemplate {
        intent: Intent::Temporal,
        action: "Examine temporal patterns",
        notebooks: &["03_temporal_patterns.ipynb"],
        recommend: &["03_temporal_patterns.ipynb"],
        look_for: &["autocorrelation", "diurnal", "ramp_events"],
        extract: "Diurnal, seasonal and ramp statistics",
        key_patterns: &["acf", "resample", "ramp"],
    },
    StepTemplate {
        intent: Intent::FeatureAnalysis,
        action: "Rank feature importance",
        notebooks: &["05_feature_engineering.ipynb", "07_ml_models.ipynb"],
        recommend: &["05_feature_engineering.ipynb"],
        look_for: &["feature_importances_", "permutation_importance"],
        extract: "Top features by model and horizon",
        key_patterns: &["feature_importances_", "permutation_importance"],
    },
    StepTemplate {
        intent: Intent::Uncertainty,
        action: "Review prediction intervals",
        notebooks: &["09_ensemble_uncertainty.ipynb"],
        recommend: &["09_ensemble_uncertainty.ipynb"],
        look_for: &["quantile", "interval_coverage", "pinball_loss"],
        extract: "Interval coverage and width by horizon",
        key_patterns: &["quantile", "coverage"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
    pub step: usize,
    pub action: String,
    pub notebooks: Vec<String>,
    pub look_for: Vec<String>,
    pub extract: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowPlan {
    pub steps: Vec<WorkflowStep>,
    /// Deduplicated, first-seen order.
    pub recommended_notebooks: Vec<String>,
    pub key_patterns: Vec<String>,
}

fn push_unique(into: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !into.iter().any(|seen| seen == item) {
            into.push((*item).to_string());
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[must_use]
pub fn plan(intents: &[Intent]) -> WorkflowPlan {
    let mut plan = WorkflowPlan::default();
    for template in STEPS.iter().filter(|t| intents.contains(&t.intent)) {
        plan.steps.push(WorkflowStep {
            step: plan.steps.len() + 1,
            action: template.action.to_string(),
            notebooks: owned(template.notebooks),
            look_for: owned(template.look_for),
            extract: template.extract.to_string(),
        });
        push_unique(&mut plan.recommended_notebooks, template.recommend);
        push_unique(&mut plan.key_patterns, template.key_patterns);
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_follow_table_order_and_number_from_one() {
        let plan = plan(&[Intent::Business, Intent::PowerCurve]);
        let actions: Vec<&str> = plan.steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            vec!["Analyze power curve characteristics", "Calculate business impact"]
        );
        assert_eq!(plan.steps[1].step, 2);
        assert_eq!(
            plan.recommended_notebooks,
            vec!["02_wind_physics_analysis.ipynb", "12_business_impact.ipynb"]
        );
    }

    #[test]
    fn general_and_comparison_add_no_steps() {
        assert_eq!(plan(&[Intent::General, Intent::Comparison]), WorkflowPlan::default());
    }

    #[test]
    fn key_patterns_are_deduplicated() {
        let plan = plan(&[Intent::PowerCurve, Intent::Performance]);
        let unique: std::collections::HashSet<&String> = plan.key_patterns.iter().collect();
        assert_eq!(unique.len(), plan.key_patterns.len());
        assert!(plan.key_patterns.contains(&"rmse".to_string()));
    }
}
