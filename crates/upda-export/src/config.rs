use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use upda_core::paths;

use crate::error::ExportError;

pub const TEMPLATE_ENV: &str = "UPDA_TEMPLATE";
pub const DATA_ROOT_ENV: &str = "UPDA_DATA_ROOT";

/// Where the reporter reads its template from and writes reports to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Single-page PDF the score sheet is drawn over.
    pub template_path: PathBuf,
    /// Root merged reports are filed under. See [`paths::report_dir`].
    pub data_root: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(paths::DEFAULT_TEMPLATE),
            data_root: PathBuf::from(paths::DEFAULT_DATA_ROOT),
        }
    }
}

impl ReportConfig {
    /// Read a JSON config file. Fields the file leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExportError::Config(format!("failed to read config at {}: {e}", path.display()))
        })?;
        let config: ReportConfig = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "report config loaded");
        Ok(config)
    }

    /// Apply `UPDA_TEMPLATE` / `UPDA_DATA_ROOT` when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env::var(TEMPLATE_ENV).ok(), env::var(DATA_ROOT_ENV).ok())
    }

    pub fn with_overrides(mut self, template: Option<String>, data_root: Option<String>) -> Self {
        if let Some(template) = template.filter(|v| !v.is_empty()) {
            self.template_path = PathBuf::from(template);
        }
        if let Some(data_root) = data_root.filter(|v| !v.is_empty()) {
            self.data_root = PathBuf::from(data_root);
        }
        self
    }
}
