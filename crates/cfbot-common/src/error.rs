//! Error types and utilities for cfbot.

use thiserror::Error;

/// Boxed error used as the optional source of wrapped errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for cfbot operations.
pub type Result<T> = std::result::Result<T, CfBotError>;

/// Main error type for cfbot operations.
#[derive(Error, Debug)]
pub enum CfBotError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxError>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The Codeforces API could not be reached at all (connect failure or timeout).
    #[error("Codeforces API unreachable: {message}")]
    Unreachable {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxError>,
    },

    /// Any other transport level failure.
    #[error("Network error: {message}")]
    Network {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxError>,
    },

    /// The Codeforces API answered with `status: FAILED`.
    #[error("Codeforces API error: {comment}")]
    Codeforces {
        /// The `comment` field of the response.
        comment: String,
    },

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Graph generation and plotting errors.
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxError>,
    },

    /// Localization errors.
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description.
        message: String,
        /// Locale being loaded, if any.
        locale: Option<String>,
    },

    /// Validation errors for user input or data.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Offending field, if any.
        field: Option<String>,
    },
}

impl CfBotError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new unreachable error.
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new unreachable error with source.
    pub fn unreachable_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unreachable {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error with source.
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Codeforces rejection error.
    pub fn codeforces(comment: impl Into<String>) -> Self {
        Self::Codeforces {
            comment: comment.into(),
        }
    }

    /// Create a new graph error.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source.
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error with locale.
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    /// Create a new validation error with field name.
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this is a Codeforces rejection caused by an unknown handle.
    ///
    /// Codeforces does not return error codes, only a free-form comment such as
    /// `handle: User with handle tourist2 not found`.
    pub fn is_handle_not_found(&self) -> bool {
        matches!(self, Self::Codeforces { comment } if comment.contains("not found"))
    }
}

impl From<reqwest::Error> for CfBotError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::unreachable_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::unreachable_with_source("Connection failed", err)
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}
