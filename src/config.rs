use crate::error::{ImportError, Result};
use crate::report::DEFAULT_LOG_PATH;
use crate::tracker::DEFAULT_GH_BIN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".issue-import.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub tracker: TrackerSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSettings {
    #[serde(default = "default_bin")]
    pub bin: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

fn default_bin() -> String {
    DEFAULT_GH_BIN.to_string()
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            bin: default_bin(),
            repo: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bin: Option<String>,
    pub repo: Option<String>,
    pub log_path: Option<PathBuf>,
}

impl ImportConfig {
    /// Load configuration for a run started in `start_path`.
    ///
    /// An explicit path must exist. Otherwise the nearest
    /// `.issue-import.yml` in `start_path` or its ancestors is used, and
    /// built-in defaults apply when there is none.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ImportError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(start_path),
        };

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(bin) = overrides.bin {
            self.tracker.bin = bin;
        }
        if overrides.repo.is_some() {
            self.tracker.repo = overrides.repo;
        }
        if let Some(log_path) = overrides.log_path {
            self.output.log_path = log_path;
        }
        self
    }
}
