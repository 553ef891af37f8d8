//! Intent classification.
//!
//! Matching is plain substring containment on the lower-cased query, so `cost` also fires
//! inside `costly` or `postcost`. Every intent whose list has a hit is reported, in table
//! order.

use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Performance,
    PowerCurve,
    Temporal,
    Business,
    Uncertainty,
    ErrorAnalysis,
    Comparison,
    DataQuality,
    FeatureAnalysis,
    General,
}

impl Intent {
    pub const ALL: [Intent; 10] = [
        Intent::Performance,
        Intent::PowerCurve,
        Intent::Temporal,
        Intent::Business,
        Intent::Uncertainty,
        Intent::ErrorAnalysis,
        Intent::Comparison,
        Intent::DataQuality,
        Intent::FeatureAnalysis,
        Intent::General,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::PowerCurve => "power_curve",
            Self::Temporal => "temporal",
            Self::Business => "business",
            Self::Uncertainty => "uncertainty",
            Self::ErrorAnalysis => "error_analysis",
            Self::Comparison => "comparison",
            Self::DataQuality => "data_quality",
            Self::FeatureAnalysis => "feature_analysis",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = RouterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim().to_lowercase().replace(['-', ' '], "_");
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == key)
            .ok_or_else(|| RouterError::UnknownIntent(raw.to_string()))
    }
}

/// Intent → keyword phrases. Order here is the order intents are reported in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentTable {
    entries: Vec<(Intent, Vec<String>)>,
}

const DEFAULT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Performance,
        &[
            "rmse",
            "mae",
            "accuracy",
            "performance",
            "error",
            "forecast quality",
            "baseline",
            "model comparison",
            "best model",
            "worst model",
        ],
    ),
    (
        Intent::PowerCurve,
        &[
            "power curve",
            "capacity factor",
            "cut-in",
            "rated speed",
            "wind speed",
            "turbine",
            "power output",
            "cut-out",
            "rated power",
        ],
    ),
    (
        Intent::Temporal,
        &[
            "hourly",
            "daily",
            "seasonal",
            "pattern",
            "trend",
            "diurnal",
            "ramp",
            "time",
            "temporal",
            "autocorrelation",
            "lag",
        ],
    ),
    (
        Intent::Business,
        &[
            "co2",
            "carbon",
            "economic",
            "value",
            "savings",
            "cost",
            "environmental",
            "sustainability",
            "grid",
            "penetration",
            "revenue",
        ],
    ),
    (
        Intent::Uncertainty,
        &[
            "confidence",
            "interval",
            "uncertainty",
            "risk",
            "reliability",
            "bounds",
            "prediction interval",
            "quantile",
        ],
    ),
    (
        Intent::ErrorAnalysis,
        &[
            "bias",
            "overpredict",
            "underpredict",
            "error pattern",
            "residual",
            "systematic",
            "diagnostic",
        ],
    ),
    (
        Intent::Comparison,
        &[
            "compare",
            "versus",
            "better",
            "which model",
            "trade-off",
            "best",
            "worst",
            "rank",
            "ranking",
        ],
    ),
    (
        Intent::DataQuality,
        &[
            "missing",
            "outlier",
            "quality",
            "completeness",
            "validation",
            "clean",
        ],
    ),
    (
        Intent::FeatureAnalysis,
        &[
            "feature importance",
            "important features",
            "feature ranking",
            "variable importance",
            "shap",
            "permutation importance",
        ],
    ),
];

impl Default for IntentTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS
                .iter()
                .map(|(intent, words)| (*intent, words.iter().map(|w| (*w).to_string()).collect()))
                .collect(),
        )
    }
}

impl IntentTable {
    /// Keywords are lower-cased on the way in.
    #[must_use]
    pub fn new(entries: Vec<(Intent, Vec<String>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(intent, words)| (intent, words.into_iter().map(|w| w.to_lowercase()).collect()))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn keywords(&self, intent: Intent) -> &[String] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == intent)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Every matching intent in table order, or `[General]` when nothing matches.
    #[must_use]
    pub fn classify(&self, query: &str) -> Vec<Intent> {
        let lowered = query.to_lowercase();
        let matched: Vec<Intent> = self
            .entries
            .iter()
            .filter(|(_, words)| words.iter().any(|w| lowered.contains(w.as_str())))
            .map(|(intent, _)| *intent)
            .collect();
        if matched.is_empty() {
            vec![Intent::General]
        } else {
            matched
        }
    }
}
