use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "WINDFARM_DATA_DIR";
pub const PROMPTS_DIR_ENV: &str = "WINDFARM_PROMPTS_DIR";
pub const CONFIG_ENV: &str = "WINDFARM_CONFIG";

pub const DEFAULT_DATA_DIR: &str = "data/processed";
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";
pub const CONFIG_FILENAME: &str = "project_status.json";

/// Filesystem locations the router reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub prompts_dir: PathBuf,
    pub config_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Settings {
    /// Resolve from `WINDFARM_DATA_DIR`, `WINDFARM_PROMPTS_DIR` and `WINDFARM_CONFIG`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset. The config path defaults to a file inside the data dir.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        let data_dir = get(DATA_DIR_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let prompts_dir = get(PROMPTS_DIR_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPTS_DIR));
        let config_path = get(CONFIG_ENV).unwrap_or_else(|| data_dir.join(CONFIG_FILENAME));
        Self {
            data_dir,
            prompts_dir,
            config_path,
        }
    }

    /// Point at another data directory; a config path that followed the old one follows along.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        if self.config_path == self.data_dir.join(CONFIG_FILENAME) {
            self.config_path = data_dir.join(CONFIG_FILENAME);
        }
        self.data_dir = data_dir;
        self
    }

    #[must_use]
    pub fn with_prompts_dir(mut self, prompts_dir: impl Into<PathBuf>) -> Self {
        self.prompts_dir = prompts_dir.into();
        self
    }

    #[must_use]
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }
}
