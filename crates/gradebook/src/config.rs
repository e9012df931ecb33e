//! Configuration management for gradebook.
//!
//! Configuration is loaded with figment from defaults, an optional TOML file
//! and `GRADEBOOK_`-prefixed environment variables.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name.
const CONFIG_DIR_NAME: &str = "gradebook";

/// Upper bound for `report.gpa_precision`.
const MAX_GPA_PRECISION: usize = 6;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GRADEBOOK_`)
/// 2. TOML config file at `~/.config/gradebook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report output configuration.
    pub report: ReportConfig,
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places used when printing a GPA.
    pub gpa_precision: usize,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            gpa_precision: 1,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("GRADEBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", config_file.display());
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.report.gpa_precision > MAX_GPA_PRECISION {
            return Err(Error::config_validation(format!(
                "gpa_precision ({}) must be at most {MAX_GPA_PRECISION}",
                self.report.gpa_precision
            )));
        }
        Ok(())
    }

    /// Format a GPA with the configured precision.
    #[must_use]
    pub fn format_gpa(&self, gpa: f64) -> String {
        format!("{gpa:.prec$}", prec = self.report.gpa_precision)
    }
}
