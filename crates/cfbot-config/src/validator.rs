//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use cfbot_common::{CfBotError, Result};
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.discord.token.trim().is_empty() {
            return Err(CfBotError::validation_field(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        if config.discord.prefix.trim().is_empty() {
            return Err(CfBotError::validation_field(
                "Command prefix cannot be empty",
                "discord.prefix",
            ));
        }

        Self::validate_base_url(&config.codeforces.api_url, "codeforces.api_url")?;
        Self::validate_base_url(&config.codeforces.contest_url, "codeforces.contest_url")?;

        if config.codeforces.request_timeout_seconds == 0 {
            return Err(CfBotError::validation_field(
                "Request timeout must be greater than 0",
                "codeforces.request_timeout_seconds",
            ));
        }

        if config.graphs.width == 0 || config.graphs.height == 0 {
            return Err(CfBotError::validation_field(
                "Graph dimensions must be greater than 0",
                "graphs",
            ));
        }

        if !is_hex_color(&config.graphs.background) {
            return Err(CfBotError::validation_field(
                format!("Invalid color '{}', expected #rrggbb", config.graphs.background),
                "graphs.background",
            ));
        }

        Ok(())
    }

    fn validate_base_url(value: &str, field: &str) -> Result<()> {
        let url = Url::parse(value)
            .map_err(|e| CfBotError::validation_field(format!("Invalid URL '{value}': {e}"), field))?;

        if url.cannot_be_a_base() || !value.ends_with('/') {
            return Err(CfBotError::validation_field(
                format!("URL '{value}' must be a base URL ending with '/'"),
                field,
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
