//! # cfbot Common
//!
//! Shared types, utilities, and the Codeforces API client for cfbot.
//!
//! This crate provides the foundational types used across all other crates in
//! the cfbot workspace: the error type, logging setup, the wire models of the
//! Codeforces API and the client that fetches them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod codeforces;
pub mod error;
pub mod logging;
pub mod models;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use codeforces::{CodeforcesApi, CodeforcesClient, CodeforcesClientConfig};
pub use error::{CfBotError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use models::*;
pub use types::*;
pub use utils::*;
