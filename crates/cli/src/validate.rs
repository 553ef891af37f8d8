//! Environment check for `windfarm validate`.

use serde::Serialize;
use std::collections::BTreeMap;
use windfarm_data::CategoryCatalog;
use windfarm_router::{ProjectConfig, Settings, TemplateKey};

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub data_dir: DirCheck,
    pub tables: TableCheck,
    pub config: ConfigCheck,
    pub prompts: PromptCheck,
}

#[derive(Debug, Serialize)]
pub struct DirCheck {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct TableCheck {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigCheck {
    pub path: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize)]
pub struct PromptCheck {
    pub dir: String,
    pub present: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

/// Only a missing data directory fails validation; everything else degrades.
pub fn validate(settings: &Settings) -> ValidationReport {
    let data_exists = settings.data_dir.is_dir();

    let catalog = CategoryCatalog::default();
    let (present, missing): (Vec<&str>, Vec<&str>) = catalog
        .all_files()
        .into_iter()
        .partition(|file| settings.data_dir.join(file).is_file());

    let config_exists = settings.config_path.is_file();
    let (features, error) = if config_exists {
        match ProjectConfig::try_load(&settings.config_path) {
            Ok(config) => (config.features, None),
            Err(err) => (BTreeMap::new(), Some(err.to_string())),
        }
    } else {
        (BTreeMap::new(), None)
    };

    let (prompts_present, prompts_missing): (Vec<TemplateKey>, Vec<TemplateKey>) = TemplateKey::ALL
        .into_iter()
        .partition(|key| settings.prompts_dir.join(key.filename()).is_file());

    ValidationReport {
        ok: data_exists,
        data_dir: DirCheck {
            path: settings.data_dir.display().to_string(),
            exists: data_exists,
        },
        tables: TableCheck {
            present: present.into_iter().map(str::to_string).collect(),
            missing: missing.into_iter().map(str::to_string).collect(),
        },
        config: ConfigCheck {
            path: settings.config_path.display().to_string(),
            exists: config_exists,
            error,
            features,
        },
        prompts: PromptCheck {
            dir: settings.prompts_dir.display().to_string(),
            present: prompts_present.into_iter().map(TemplateKey::filename).collect(),
            missing: prompts_missing.into_iter().map(TemplateKey::filename).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_data_dir_fails() {
        let settings = Settings::default().with_data_dir("/nonexistent/windfarm");
        let report = validate(&settings);
        assert!(!report.ok);
        assert!(report.tables.present.is_empty());
        assert!(!report.config.exists);
    }

    #[test]
    fn reports_tables_prompts_and_malformed_config() {
        let tmp = tempdir().unwrap();
        let data = tmp.path().join("data");
        let prompts = tmp.path().join("prompts");
        fs::create_dir_all(&data).unwrap();
        fs::create_dir_all(&prompts).unwrap();
        fs::write(data.join("power_curve_parameters.parquet"), b"").unwrap();
        fs::write(data.join("project_status.json"), "{ nope").unwrap();
        fs::write(prompts.join("05_quick_reference.md"), "# Quick").unwrap();

        let settings = Settings::default()
            .with_data_dir(&data)
            .with_prompts_dir(&prompts);
        let report = validate(&settings);
        assert!(report.ok);
        assert_eq!(report.tables.present, vec!["power_curve_parameters.parquet"]);
        assert!(report.config.error.is_some());
        assert_eq!(report.prompts.present, vec!["05_quick_reference.md"]);
        assert_eq!(report.prompts.missing.len(), 5);
    }
}
