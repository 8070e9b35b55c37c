//! # cfbot Graphs
//!
//! Chart generation for cfbot: rating history comparisons with rank tier
//! bands, and histograms of solved problem ratings.
//!
//! Charts are drawn with plotters into an in-memory RGB buffer and encoded to
//! PNG, so nothing touches the file system.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod rank;
pub mod rating_history;
pub mod solved_histogram;
pub mod style;
pub mod traits;
pub mod utils;

pub use rank::*;
pub use rating_history::*;
pub use solved_histogram::*;
pub use style::*;
pub use traits::*;
pub use utils::*;
