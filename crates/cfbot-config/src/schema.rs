//! Configuration schema definitions using serde.
//!
//! Every section is `#[serde(default)]`, so a YAML file only needs the keys it
//! wants to change (in practice just `discord.token`).

use cfbot_common::CodeforcesClientConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for cfbot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Codeforces API configuration.
    pub codeforces: CodeforcesConfig,
    /// Data configuration.
    pub data: DataConfig,
    /// Graph configuration.
    pub graphs: GraphsConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Prefix for text commands.
    pub prefix: String,
}

/// Codeforces API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeforcesConfig {
    /// API root, ending with `/`.
    pub api_url: String,
    /// Root of contest pages, ending with `/`. Problem links are
    /// `<contest_url><contest id>/problem/<index>`.
    pub contest_url: String,
    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
    /// Idle connections kept per host.
    pub max_idle_per_host: usize,
}

impl CodeforcesConfig {
    /// Settings for building the shared API client.
    pub fn client_config(&self) -> CodeforcesClientConfig {
        CodeforcesClientConfig::new(self.api_url.clone())
            .with_timeout(self.request_timeout_seconds)
            .with_pool_size(self.max_idle_per_host)
    }

    /// Link to a problem page.
    pub fn problem_url(&self, contest_id: u32, index: &str) -> String {
        format!("{}{contest_id}/problem/{index}", self.contest_url)
    }
}

/// Data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Language code for replies.
    pub language: String,
}

/// Graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Background color as `#rrggbb`.
    pub background: String,
}
