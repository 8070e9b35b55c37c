//! Codeforces API client with connection pooling.
//!
//! The client issues plain GET requests against the public API root, decodes
//! the `{status, comment, result}` envelope and hands the payload back. There
//! is no retry, rate limiting or caching: a command that fails simply reports
//! the failure to the user.

use crate::error::{CfBotError, Result};
use crate::models::{ApiResponse, ProblemSet, RatingChange, Standings, Submission, User};
use crate::types::Handle;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Default API root.
pub const DEFAULT_API_URL: &str = "https://codeforces.com/api/";

/// Configuration for the Codeforces API client.
#[derive(Debug, Clone)]
pub struct CodeforcesClientConfig {
    /// API root, must end with `/` (e.g. "https://codeforces.com/api/").
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection pool max idle connections per host.
    pub max_idle_per_host: usize,
}

impl Default for CodeforcesClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            max_idle_per_host: 10,
        }
    }
}

impl CodeforcesClientConfig {
    /// Create a new configuration for the given API root.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the connection pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, max_idle_per_host: usize) -> Self {
        self.max_idle_per_host = max_idle_per_host;
        self
    }
}

/// The Codeforces endpoints the bot uses.
///
/// Implemented by [`CodeforcesClient`] for real traffic and by canned-response
/// fakes in tests.
#[async_trait]
pub trait CodeforcesApi: Send + Sync {
    /// `problemset.problems`: every problem of the problem set.
    async fn problemset_problems(&self) -> Result<ProblemSet>;

    /// `user.info`: profiles of the given handles.
    async fn user_info(&self, handles: &[Handle]) -> Result<Vec<User>>;

    /// `user.status`: every submission of the handle.
    async fn user_status(&self, handle: &Handle) -> Result<Vec<Submission>>;

    /// `user.rating`: rating changes of the handle in contest order.
    async fn user_rating(&self, handle: &Handle) -> Result<Vec<RatingChange>>;

    /// `contest.standings`: contest header plus `count` rows starting at `from`.
    async fn contest_standings(&self, contest_id: u32, from: u32, count: u32) -> Result<Standings>;
}

/// Codeforces API client sharing one connection pool across all commands.
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    client: Client,
    base_url: Url,
    config: CodeforcesClientConfig,
}

impl CodeforcesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CodeforcesClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| CfBotError::config_with_source("Invalid Codeforces API URL", e))?;
        if base_url.cannot_be_a_base() {
            return Err(CfBotError::config(format!(
                "Codeforces API URL cannot be used as a base: {}",
                config.api_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| CfBotError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// The configuration the client was built with.
    pub const fn config(&self) -> &CodeforcesClientConfig {
        &self.config
    }

    /// Build the URL of an API method, e.g. `user.rating`.
    fn build_url(&self, method: &str) -> Result<Url> {
        self.base_url
            .join(method)
            .map_err(|e| CfBotError::config_with_source(format!("Invalid API method {method}"), e))
    }

    /// Issue a GET for `method` and decode the envelope.
    #[instrument(skip(self, params), fields(method = %method))]
    async fn query<T>(&self, method: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(method)?;
        debug!("Requesting {} with {} parameters", url, params.len());

        let response = match self.client.get(url).query(params).send().await {
            Ok(response) => response,
            Err(e) => {
                let err = CfBotError::from(e);
                error!("Request to Codeforces API encountered error: {}", err);
                return Err(err);
            }
        };

        // Rejections come back as 400 with a FAILED envelope, so the status is
        // only logged and the body is always decoded.
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Codeforces API response body: {}", e);
            CfBotError::from(e)
        })?;
        debug!(%status, bytes = body.len(), "Received Codeforces API response");

        parse_response(&body)
    }
}

/// Decode an API response body into its payload.
pub fn parse_response<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: ApiResponse<T> = serde_json::from_str(body)?;
    envelope.into_result()
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn problemset_problems(&self) -> Result<ProblemSet> {
        self.query("problemset.problems", &[]).await
    }

    async fn user_info(&self, handles: &[Handle]) -> Result<Vec<User>> {
        let joined = handles
            .iter()
            .map(Handle::as_str)
            .collect::<Vec<_>>()
            .join(";");
        self.query("user.info", &[("handles", joined)]).await
    }

    async fn user_status(&self, handle: &Handle) -> Result<Vec<Submission>> {
        self.query("user.status", &[("handle", handle.to_string())])
            .await
    }

    async fn user_rating(&self, handle: &Handle) -> Result<Vec<RatingChange>> {
        self.query("user.rating", &[("handle", handle.to_string())])
            .await
    }

    async fn contest_standings(&self, contest_id: u32, from: u32, count: u32) -> Result<Standings> {
        self.query(
            "contest.standings",
            &[
                ("contestId", contest_id.to_string()),
                ("from", from.to_string()),
                ("count", count.to_string()),
            ],
        )
        .await
    }
}
