//! Configuration for the square-of-sum calculator.
//!
//! Layered with figment, later layers win:
//! - Default values
//! - TOML configuration file (`.squaresum/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides (applied by the command layer)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `SQS_` and use double underscores
//! to separate nested levels:
//! - `SQS_CALCULATOR__VALIDATION=strict` sets `calculator.validation`
//! - `SQS_OUTPUT__FORMAT=json` sets `output.format`
//! - `SQS_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculator::ValidationMode;
use crate::io::OutputFormat;

/// Directory holding the settings file, searched upward from the working directory.
pub const CONFIG_DIR: &str = ".squaresum";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "SQS_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Configuration file already exists at {0}. Use --force to overwrite")]
    AlreadyExists(PathBuf),

    #[error("No configuration file found")]
    NotFound,

    #[error("Configuration file not found: {0}")]
    Missing(PathBuf),

    #[error("Configuration file is corrupted: {0}")]
    Corrupted(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Calculation settings
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CalculatorConfig {
    /// What to do with text that is not a decimal number
    #[serde(default)]
    pub validation: ValidationMode,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// `text` or `json`
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level for every target without an explicit entry
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `squaresum::calculator = "trace"`
    #[serde(default)]
    pub modules: IndexMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            calculator: CalculatorConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: IndexMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn directives(&self) -> String {
        let mut filter = self.default.clone();
        for (module, level) in &self.modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().replace("__", ".").into())
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings: Settings = Self::file_layers(path.as_ref())
            .merge(env_provider())
            .extract()
            .map_err(Box::new)?;
        Ok(settings)
    }

    /// Defaults overlaid with the TOML file, without environment overrides
    fn file_layers(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
    }

    /// Find `.squaresum/settings.toml` from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where `.squaresum` is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Check if configuration is present and parseable
    pub fn check_init() -> Result<(), ConfigError> {
        let config_path = Self::find_workspace_config().ok_or(ConfigError::NotFound)?;
        if !config_path.exists() {
            return Err(ConfigError::NotFound);
        }

        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str::<Settings>(&content).map_err(|e| {
            ConfigError::Corrupted(format!(
                "{e}\nRun 'squaresum init --force' to regenerate."
            ))
        })?;

        Ok(())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file under `root`
    pub fn init_config_file(root: impl AsRef<Path>, force: bool) -> Result<PathBuf, ConfigError> {
        let config_path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ConfigError::AlreadyExists(config_path));
        }

        Settings::default().save(&config_path)?;
        tracing::debug!(path = %config_path.display(), "wrote default settings");

        Ok(config_path)
    }
}
