use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default target used when `--expected` is not given.
    #[serde(default)]
    pub expected_monthly_hours: f64,
    /// Directory where exports are written; empty means the current directory.
    #[serde(default)]
    pub output_dir: String,
    #[serde(default = "default_format")]
    pub export_format: ExportFormat,
    /// Worksheet to read; the first one when unset.
    #[serde(default)]
    pub sheet: Option<String>,
}

fn default_format() -> ExportFormat {
    ExportFormat::Xlsx
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_monthly_hours: 0.0,
            output_dir: String::new(),
            export_format: default_format(),
            sheet: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhours.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        if !(cfg.expected_monthly_hours.is_finite() && cfg.expected_monthly_hours >= 0.0) {
            return Err(AppError::Config(format!(
                "expected_monthly_hours must be non-negative, found {}",
                cfg.expected_monthly_hours
            )));
        }

        debug!(path = %path.display(), ?cfg, "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Export directory with `~` expanded; current directory when unset.
    pub fn output_dir(&self) -> PathBuf {
        if self.output_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            expand_tilde(self.output_dir.trim())
        }
    }
}
