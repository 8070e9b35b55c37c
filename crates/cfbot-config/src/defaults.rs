//! Default values for every configuration section.

use crate::schema::*;
use cfbot_common::codeforces::DEFAULT_API_URL;

/// Default root of contest pages.
pub const DEFAULT_CONTEST_URL: &str = "https://codeforces.com/contest/";

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: ";".to_string(),
        }
    }
}

impl Default for CodeforcesConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            contest_url: DEFAULT_CONTEST_URL.to_string(),
            request_timeout_seconds: 30,
            max_idle_per_host: 10,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            enable_grid: true,
            background: "#ffffff".to_string(),
        }
    }
}
