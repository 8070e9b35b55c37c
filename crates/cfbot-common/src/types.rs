//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Codeforces handle. Opaque; only the remote API decides whether it exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(pub String);

impl Handle {
    /// Borrow the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Handle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Handle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Best-effort identity of a problem.
///
/// Codeforces problems have no stable ID across contests (the same problem is
/// published in several divisions), so (name, rating) is used as the key. Two
/// distinct problems sharing both name and rating collapse into one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProblemKey {
    /// Problem name as shown on Codeforces.
    pub name: String,
    /// Problem difficulty rating.
    pub rating: i32,
}

impl ProblemKey {
    /// Creates a new problem key.
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

/// Where a problem can be opened: contest plus problem index (e.g. `1520`, `"C"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemLocation {
    /// Contest the problem belongs to.
    pub contest_id: u32,
    /// Problem index within the contest.
    pub index: String,
}
