use std::collections::BTreeMap;
use std::path::Path;

/// Static guidance fragments shipped as markdown files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKey {
    MasterRouter,
    NotebookNavigation,
    PowerCurveAnalysis,
    ForecastPerformance,
    BusinessImpact,
    QuickReference,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::MasterRouter,
        TemplateKey::NotebookNavigation,
        TemplateKey::PowerCurveAnalysis,
        TemplateKey::ForecastPerformance,
        TemplateKey::BusinessImpact,
        TemplateKey::QuickReference,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MasterRouter => "master_router",
            Self::NotebookNavigation => "notebook_navigation",
            Self::PowerCurveAnalysis => "power_curve_analysis",
            Self::ForecastPerformance => "forecast_performance",
            Self::BusinessImpact => "business_impact",
            Self::QuickReference => "quick_reference",
        }
    }

    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::MasterRouter => "00_master_router.md",
            Self::NotebookNavigation => "01_notebook_navigation.md",
            Self::PowerCurveAnalysis => "02_power_curve_analysis.md",
            Self::ForecastPerformance => "03_forecast_performance.md",
            Self::BusinessImpact => "04_business_impact.md",
            Self::QuickReference => "05_quick_reference.md",
        }
    }

    /// Stand-in text when the fragment file is missing, e.g. `# Quick_Reference prompt not found`.
    #[must_use]
    pub fn placeholder(self) -> String {
        let title: Vec<String> = self
            .name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect();
        format!("# {} prompt not found", title.join("_"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    fragments: BTreeMap<TemplateKey, String>,
    loaded: Vec<TemplateKey>,
}

impl TemplateStore {
    /// Read every fragment from `dir`. Missing or unreadable files get a placeholder.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let mut store = Self::default();
        for key in TemplateKey::ALL {
            let path = dir.join(key.filename());
            if !path.exists() {
                log::warn!("Prompt file not found: {}", path.display());
                store.fragments.insert(key, key.placeholder());
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    store.fragments.insert(key, text);
                    store.loaded.push(key);
                }
                Err(err) => {
                    log::error!("Failed to read prompt {}: {err}", path.display());
                    store.fragments.insert(key, key.placeholder());
                }
            }
        }
        store
    }

    #[must_use]
    pub fn from_fragments(fragments: impl IntoIterator<Item = (TemplateKey, String)>) -> Self {
        let mut store = Self::default();
        for (key, text) in fragments {
            store.fragments.insert(key, text);
            store.loaded.push(key);
        }
        store
    }

    #[must_use]
    pub fn get(&self, key: TemplateKey) -> String {
        self.fragments
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.placeholder())
    }

    /// Names of fragments read from disk (placeholders excluded).
    #[must_use]
    pub fn loaded_names(&self) -> Vec<&'static str> {
        self.loaded.iter().map(|key| key.name()).collect()
    }
}
