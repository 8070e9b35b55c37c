//! # cfbot Commands
//!
//! Discord commands implemented with the Poise framework.
//!
//! Each command is a thin wrapper around an async function that talks to a
//! [`cfbot_common::CodeforcesApi`] and returns a [`Reply`], so the command
//! logic can be exercised without a Discord connection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod framework;
pub mod gitgud;
pub mod handles;
pub mod help;
pub mod rating;
pub mod recommend;
pub mod reply;
pub mod solved;

pub use framework::*;
pub use reply::*;
