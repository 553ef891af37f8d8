use crate::config::ProjectConfig;
use crate::entities::ExtractedEntities;
use crate::gating::{closed_gate, FallbackPayload, GateRule, DEFAULT_GATES};
use crate::intent::Intent;
use crate::templates::{TemplateKey, TemplateStore};
use std::fmt::Write as _;

const RESPONSE_TEMPLATE: &str = "## RESPONSE TEMPLATE
Structure your response as:

1. **Direct Answer**: Specific metric or finding
2. **Source**: Which notebook and section
3. **Methodology**: How the result was calculated
4. **Business Context**: Why this matters for sustainability
5. **Confidence Level**: High/Medium/Low based on data quality
6. **Next Steps**: Related analyses to consider

Remember: focus on actionable insights backed by the processed results.
";

/// Either the combined guidance document or a feature-unavailable payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Assembly {
    Guided(String),
    Fallback(FallbackPayload),
}

#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    templates: TemplateStore,
    gates: Vec<GateRule>,
}

impl ResponseAssembler {
    #[must_use]
    pub fn new(templates: TemplateStore) -> Self {
        Self {
            templates,
            gates: DEFAULT_GATES.to_vec(),
        }
    }

    #[must_use]
    pub fn with_gates(mut self, gates: Vec<GateRule>) -> Self {
        self.gates = gates;
        self
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    #[must_use]
    pub fn gates(&self) -> &[GateRule] {
        &self.gates
    }

    /// Gate first; only an open gate leads to the guidance document.
    #[must_use]
    pub fn assemble(
        &self,
        query: &str,
        intents: &[Intent],
        entities: &ExtractedEntities,
        config: &ProjectConfig,
    ) -> Assembly {
        if let Some(rule) = closed_gate(query, config, &self.gates) {
            log::info!("Feature '{}' unavailable; answering with fallback", rule.feature);
            return Assembly::Fallback(FallbackPayload::build(rule, config));
        }
        Assembly::Guided(self.guidance(intents, entities))
    }

    /// Navigation fragment, one labeled block per intent, entity guidance, response template.
    #[must_use]
    pub fn guidance(&self, intents: &[Intent], entities: &ExtractedEntities) -> String {
        let mut doc = self.templates.get(TemplateKey::NotebookNavigation);
        doc.push_str("\n\n");

        for intent in intents {
            if let Some((label, key)) = intent_block(*intent) {
                let _ = writeln!(doc, "## {label}");
                doc.push_str(&self.templates.get(key));
                doc.push_str("\n\n");
            }
        }

        if !entities.is_empty() {
            doc.push_str("## ENTITY-SPECIFIC GUIDANCE\n");
            if !entities.wind_farms.is_empty() {
                let _ = writeln!(doc, "Focus specifically on: {}", entities.wind_farms.join(", "));
            }
            if !entities.horizons.is_empty() {
                let _ = writeln!(doc, "Analyze forecast horizons: {} hours", join(&entities.horizons));
            }
            if !entities.percentages.is_empty() {
                let _ = writeln!(
                    doc,
                    "Apply improvement percentages: {}%",
                    join(&entities.percentages)
                );
            }
            if !entities.models.is_empty() {
                let _ = writeln!(doc, "Focus on models: {}", entities.models.join(", "));
            }
            doc.push('\n');
        }

        doc.push_str(RESPONSE_TEMPLATE);
        doc
    }
}

/// Section heading and fragment for intents that contribute a block.
fn intent_block(intent: Intent) -> Option<(&'static str, TemplateKey)> {
    match intent {
        Intent::Performance => Some((
            "FORECAST PERFORMANCE ANALYSIS",
            TemplateKey::ForecastPerformance,
        )),
        Intent::PowerCurve => Some(("POWER CURVE ANALYSIS", TemplateKey::PowerCurveAnalysis)),
        Intent::Business => Some(("BUSINESS IMPACT ANALYSIS", TemplateKey::BusinessImpact)),
        Intent::Comparison => Some((
            "MODEL COMPARISON ANALYSIS",
            TemplateKey::ForecastPerformance,
        )),
        Intent::General | Intent::DataQuality => {
            Some(("GENERAL ANALYSIS", TemplateKey::QuickReference))
        }
        Intent::Temporal
        | Intent::Uncertainty
        | Intent::ErrorAnalysis
        | Intent::FeatureAnalysis => None,
    }
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assembler() -> ResponseAssembler {
        ResponseAssembler::new(TemplateStore::from_fragments([
            (TemplateKey::NotebookNavigation, "NAV".to_string()),
            (TemplateKey::ForecastPerformance, "PERF".to_string()),
            (TemplateKey::PowerCurveAnalysis, "CURVE".to_string()),
            (TemplateKey::BusinessImpact, "BIZ".to_string()),
            (TemplateKey::QuickReference, "QUICK".to_string()),
        ]))
    }

    #[test]
    fn blocks_follow_intent_order_and_share_fragments() {
        let doc = assembler().guidance(
            &[Intent::Comparison, Intent::Performance, Intent::Temporal],
            &ExtractedEntities::default(),
        );
        let expected_head = "NAV\n\n## MODEL COMPARISON ANALYSIS\nPERF\n\n## FORECAST PERFORMANCE ANALYSIS\nPERF\n\n## RESPONSE TEMPLATE\n";
        assert!(doc.starts_with(expected_head), "{doc}");
        assert!(!doc.contains("ENTITY-SPECIFIC"));
        assert!(doc.contains("6. **Next Steps**"));
    }

    #[test]
    fn entity_block_lists_each_present_kind() {
        let entities = ExtractedEntities {
            wind_farms: vec!["wp1".into(), "wp3".into()],
            horizons: vec![24],
            percentages: vec![10, 15],
            models: vec![],
        };
        let doc = assembler().guidance(&[Intent::DataQuality], &entities);
        assert!(doc.contains("## GENERAL ANALYSIS\nQUICK\n\n"));
        assert!(doc.contains(
            "## ENTITY-SPECIFIC GUIDANCE\nFocus specifically on: wp1, wp3\nAnalyze forecast horizons: 24 hours\nApply improvement percentages: 10, 15%\n\n## RESPONSE TEMPLATE"
        ));
        assert!(!doc.contains("Focus on models"));
    }

    #[test]
    fn closed_gate_short_circuits_guidance() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{"features": {"ensemble_predictions": false},
                "model_performance": {"random_forest": {"rmse": 0.151}}}"#,
        )
        .unwrap();
        let assembly = assembler().assemble(
            "rmse of the ensemble",
            &[Intent::Performance],
            &ExtractedEntities::default(),
            &config,
        );
        match assembly {
            Assembly::Fallback(payload) => {
                assert_eq!(payload.alternatives[0].model, "random_forest");
                assert_eq!(payload.alternatives[0].metrics["rmse"], 0.151);
            }
            Assembly::Guided(doc) => panic!("expected fallback, got guidance:\n{doc}"),
        }
    }

    #[test]
    fn no_gates_means_always_guided() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"features": {"ensemble_predictions": false}}"#).unwrap();
        let assembly = assembler().with_gates(Vec::new()).assemble(
            "ensemble",
            &[Intent::General],
            &ExtractedEntities::default(),
            &config,
        );
        assert!(matches!(assembly, Assembly::Guided(doc) if doc.contains("GENERAL ANALYSIS")));
    }
}
