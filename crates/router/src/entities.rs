use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use windfarm_data::normalize_farm_id;

/// Model names recognized in free text, in reporting order.
pub const KNOWN_MODELS: &[&str] = &["persistence", "random forest", "xgboost", "lstm", "ensemble"];

/// Structured values pulled out of a query. Empty kinds are left out when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wind_farms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub horizons: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentages: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
}

impl ExtractedEntities {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wind_farms.is_empty()
            && self.horizons.is_empty()
            && self.percentages.is_empty()
            && self.models.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct EntityExtractor {
    farm: Regex,
    horizon: Regex,
    percent: Regex,
    models: Vec<String>,
}

impl EntityExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            farm: Regex::new(r"(?:wf|wp)([1-7])|wind farm ([1-7])")?,
            horizon: Regex::new(r"(\d+)[\s-]?hours?")?,
            percent: Regex::new(r"(\d+)%")?,
            models: KNOWN_MODELS.iter().map(|m| (*m).to_string()).collect(),
        })
    }

    /// Total over arbitrary text: no match simply leaves that kind empty.
    #[must_use]
    pub fn extract(&self, query: &str) -> ExtractedEntities {
        let lowered = query.to_lowercase();
        let mut entities = ExtractedEntities::default();

        for caps in self.farm.captures_iter(&lowered) {
            let digit = caps.get(1).or_else(|| caps.get(2));
            if let Some(digit) = digit {
                let canonical = normalize_farm_id(digit.as_str());
                if !entities.wind_farms.contains(&canonical) {
                    entities.wind_farms.push(canonical);
                }
            }
        }

        entities.horizons = capture_numbers(&self.horizon, &lowered);
        entities.percentages = capture_numbers(&self.percent, &lowered);

        let spaced = lowered.replace('_', " ");
        entities.models = self
            .models
            .iter()
            .filter(|model| spaced.contains(model.as_str()))
            .cloned()
            .collect();

        entities
    }
}

/// First capture group of every match as `u32`; values that overflow are dropped.
fn capture_numbers(pattern: &Regex, text: &str) -> Vec<u32> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|digits| digits.as_str().parse::<u32>().ok())
        .collect()
}
