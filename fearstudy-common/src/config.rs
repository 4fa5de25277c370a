//! Configuration loading and dataset path resolution
//!
//! Settings come from (highest priority first):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. TOML config file
//! 4. Compiled defaults

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dataset file used when nothing else names one
pub const DEFAULT_DATASET_FILE: &str = "FearStudy.csv";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "FEARSTUDY_CONFIG";

/// Environment variable naming the dataset file
pub const DATASET_ENV_VAR: &str = "FEARSTUDY_DATASET";

/// Environment variable naming the base directory for relative dataset paths
pub const BASE_DIR_ENV_VAR: &str = "FEARSTUDY_BASE_DIR";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Dataset CSV file (relative or absolute)
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Directory that relative dataset paths are resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Clear the terminal between interactive prompts
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_clear_screen() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            base_dir: None,
            clear_screen: default_clear_screen(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded TOML configuration from {}", path.display());
        Ok(config)
    }

    /// Locate and load the configuration file
    ///
    /// An explicitly named file (argument or `FEARSTUDY_CONFIG`) must load
    /// cleanly. The per-user default location is optional: when absent the
    /// compiled defaults are returned.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = env_path(CONFIG_ENV_VAR) {
            return Self::load(&path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Per-user config file location (`<config_dir>/fearstudy/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fearstudy").join("config.toml"))
}

/// Read a path from an environment variable, treating empty values as unset
fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Resolves the dataset file location from CLI, environment and config
#[derive(Debug, Clone, Default)]
pub struct DatasetPathResolver {
    cli_dataset: Option<PathBuf>,
    cli_base_dir: Option<PathBuf>,
}

impl DatasetPathResolver {
    pub fn new(cli_dataset: Option<PathBuf>, cli_base_dir: Option<PathBuf>) -> Self {
        Self {
            cli_dataset,
            cli_base_dir,
        }
    }

    /// Resolve the dataset path
    ///
    /// Relative paths are joined onto the base directory (CLI, then
    /// `FEARSTUDY_BASE_DIR`, then TOML `base_dir`, then the current working
    /// directory). Absolute paths are returned unchanged.
    pub fn resolve(&self, config: &TomlConfig) -> Result<PathBuf> {
        let dataset = if let Some(path) = &self.cli_dataset {
            debug!("Dataset path from command line: {}", path.display());
            path.clone()
        } else if let Some(path) = env_path(DATASET_ENV_VAR) {
            debug!("Dataset path from {}: {}", DATASET_ENV_VAR, path.display());
            path
        } else if let Some(path) = &config.dataset_path {
            debug!("Dataset path from config file: {}", path.display());
            path.clone()
        } else {
            debug!("Dataset path from compiled default: {}", DEFAULT_DATASET_FILE);
            PathBuf::from(DEFAULT_DATASET_FILE)
        };

        if dataset.as_os_str().is_empty() {
            return Err(Error::InvalidInput("dataset path is empty".to_string()));
        }

        if dataset.is_absolute() {
            return Ok(dataset);
        }

        Ok(self.base_dir(config)?.join(dataset))
    }

    fn base_dir(&self, config: &TomlConfig) -> Result<PathBuf> {
        if let Some(dir) = &self.cli_base_dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = env_path(BASE_DIR_ENV_VAR) {
            return Ok(dir);
        }
        if let Some(dir) = &config.base_dir {
            return Ok(dir.clone());
        }
        Ok(std::env::current_dir()?)
    }
}
