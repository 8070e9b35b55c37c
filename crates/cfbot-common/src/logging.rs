//! Structured logging infrastructure for cfbot.

use crate::error::{CfBotError, Result};
use std::{io, sync::Mutex};
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "cfbot_commands=debug"). `RUST_LOG` wins when set.
    pub level: String,
    /// Emit one JSON object per event instead of human readable lines.
    pub json_format: bool,
    /// Optional file path for log output, stdout otherwise.
    pub file_path: Option<String>,
    /// Whether to include target module information.
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Build the filter, preferring `RUST_LOG` over the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let writer = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(config.include_targets)
                    .with_ansi(config.file_path.is_none())
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| CfBotError::config_with_source("Failed to initialize logging", e))
}
