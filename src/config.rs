//! Configuration handling for the login form

use crate::sink::SinkKind;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "login-form.log";

/// User configuration, read from `config.json` in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Where accepted submissions go: "log" or "callback"
    pub sink: Option<SinkKind>,
    /// Mask the password input (default: true)
    pub mask_password: Option<bool>,
    /// Log file location override
    pub log_file: Option<PathBuf>,
    /// Log to stderr instead of a file
    pub log_to_stderr: Option<bool>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "login-form", "login-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }

    pub fn log_to_stderr(&self) -> bool {
        self.log_to_stderr.unwrap_or(false)
    }

    /// Log file path: the override, `login-form.log` in the data directory, or
    /// `login-form.log` in the working directory when no home resolves
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }
}
