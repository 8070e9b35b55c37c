//! Configuration loading utilities.

use crate::schema::Config;
use cfbot_common::CfBotError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "CFBOT_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    IoError {
        /// File being read.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] CfBotError),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for CfBotError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(inner) => inner,
            other => Self::config_with_source("Failed to load configuration", other),
        }
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, looking in order at `explicit`, `CFBOT_CONFIG_PATH`,
    /// `config.yaml` and `config.yml`, falling back to defaults. Environment
    /// overrides are applied and the result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });

        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::read_file(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, with environment overrides and validation.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::read_file(path.as_ref())?;
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document without overrides or validation.
    pub fn from_yaml_str(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            debug!("Discord token taken from environment");
            config.discord.token = token;
        }

        if let Some(prefix) = lookup("CFBOT_PREFIX") {
            config.discord.prefix = prefix;
        }

        if let Some(url) = lookup("CODEFORCES_API_URL") {
            config.codeforces.api_url = url;
        }

        if let Some(url) = lookup("CODEFORCES_CONTEST_URL") {
            config.codeforces.contest_url = url;
        }

        if let Some(timeout) = lookup("CODEFORCES_TIMEOUT") {
            config.codeforces.request_timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "CODEFORCES_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(language) = lookup("CFBOT_LANGUAGE") {
            config.data.language = language;
        }

        Ok(())
    }
}
