//! # cfbot I18n
//!
//! Fluent message catalogue for cfbot.
//!
//! Every user-visible reply string is defined in an embedded `.ftl` resource and
//! looked up through [`Messages`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod messages;

pub use loader::*;
pub use messages::*;
