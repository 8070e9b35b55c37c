//! Test utilities and shared test helpers for cfbot.
//!
//! [`FakeCodeforces`] answers API calls from canned JSON bodies so command
//! logic can be exercised without network access. Bodies go through the same
//! envelope decoding as the real client.

use crate::codeforces::{parse_response, CodeforcesApi};
use crate::error::{CfBotError, Result};
use crate::models::{ProblemSet, RatingChange, Standings, Submission, User};
use crate::types::Handle;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, Once,
};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Wrap a payload in an `OK` envelope.
pub fn ok_body(result: Value) -> String {
    json!({ "status": "OK", "result": result }).to_string()
}

/// A `FAILED` envelope with the given comment.
pub fn failed_body(comment: &str) -> String {
    json!({ "status": "FAILED", "comment": comment }).to_string()
}

/// The comment Codeforces sends for an unknown handle.
pub fn handle_not_found_comment(handle: &str) -> String {
    format!("handle: User with handle {handle} not found")
}

/// JSON for a problem entry.
pub fn problem_json(contest_id: Option<u32>, index: &str, name: &str, rating: Option<i32>, tags: &[&str]) -> Value {
    let mut problem = json!({
        "index": index,
        "name": name,
        "type": "PROGRAMMING",
        "tags": tags,
    });
    if let Some(contest_id) = contest_id {
        problem["contestId"] = json!(contest_id);
    }
    if let Some(rating) = rating {
        problem["rating"] = json!(rating);
    }
    problem
}

/// JSON for a submission entry.
pub fn submission_json(id: u64, problem: Value, verdict: Option<&str>) -> Value {
    let mut submission = json!({ "id": id, "problem": problem });
    if let Some(verdict) = verdict {
        submission["verdict"] = json!(verdict);
    }
    submission
}

/// JSON for a rating change entry.
pub fn rating_change_json(handle: &str, contest_id: u32, time: i64, old_rating: i32, new_rating: i32) -> Value {
    json!({
        "contestId": contest_id,
        "contestName": format!("Codeforces Round {contest_id}"),
        "handle": handle,
        "rank": 1,
        "ratingUpdateTimeSeconds": time,
        "oldRating": old_rating,
        "newRating": new_rating,
    })
}

/// Canned-response implementation of [`CodeforcesApi`].
///
/// Requests are keyed like `user.rating?handle=tourist`. A request without a
/// canned body fails as if the API were unreachable.
#[derive(Debug, Default)]
pub struct FakeCodeforces {
    responses: HashMap<String, String>,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl FakeCodeforces {
    /// Create a fake with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the body returned for a request key.
    #[must_use]
    pub fn with_response(mut self, key: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(key.into(), body.into());
        self
    }

    /// Register the `problemset.problems` body.
    #[must_use]
    pub fn with_problemset(self, problems: Vec<Value>) -> Self {
        self.with_response(
            "problemset.problems",
            ok_body(json!({ "problems": problems, "problemStatistics": [] })),
        )
    }

    /// Register a `user.info` body for a single handle.
    #[must_use]
    pub fn with_user(self, handle: &str, rating: Option<i32>) -> Self {
        let mut user = json!({ "handle": handle });
        if let Some(rating) = rating {
            user["rating"] = json!(rating);
        }
        self.with_response(format!("user.info?handles={handle}"), ok_body(json!([user])))
    }

    /// Register a `user.status` body.
    #[must_use]
    pub fn with_submissions(self, handle: &str, submissions: Vec<Value>) -> Self {
        self.with_response(format!("user.status?handle={handle}"), ok_body(json!(submissions)))
    }

    /// Register a `user.rating` body.
    #[must_use]
    pub fn with_rating_history(self, handle: &str, changes: Vec<Value>) -> Self {
        self.with_response(format!("user.rating?handle={handle}"), ok_body(json!(changes)))
    }

    /// Register a `contest.standings` body.
    #[must_use]
    pub fn with_contest(self, contest_id: u32, name: &str) -> Self {
        self.with_response(
            format!("contest.standings?contestId={contest_id}"),
            ok_body(json!({
                "contest": { "id": contest_id, "name": name, "type": "CF", "phase": "FINISHED" },
                "problems": [],
                "rows": [],
            })),
        )
    }

    /// Number of API calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Request keys in call order.
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn respond<T: serde::de::DeserializeOwned>(&self, key: String) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut log) = self.log.lock() {
            log.push(key.clone());
        }
        match self.responses.get(&key) {
            Some(body) => parse_response(body),
            None => Err(CfBotError::unreachable(format!("no canned response for {key}"))),
        }
    }
}

#[async_trait]
impl CodeforcesApi for FakeCodeforces {
    async fn problemset_problems(&self) -> Result<ProblemSet> {
        self.respond("problemset.problems".to_string())
    }

    async fn user_info(&self, handles: &[Handle]) -> Result<Vec<User>> {
        let joined = handles
            .iter()
            .map(Handle::as_str)
            .collect::<Vec<_>>()
            .join(";");
        self.respond(format!("user.info?handles={joined}"))
    }

    async fn user_status(&self, handle: &Handle) -> Result<Vec<Submission>> {
        self.respond(format!("user.status?handle={handle}"))
    }

    async fn user_rating(&self, handle: &Handle) -> Result<Vec<RatingChange>> {
        self.respond(format!("user.rating?handle={handle}"))
    }

    async fn contest_standings(&self, contest_id: u32, _from: u32, _count: u32) -> Result<Standings> {
        self.respond(format!("contest.standings?contestId={contest_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[tokio::test]
    async fn test_fake_serves_canned_bodies() {
        let fake = FakeCodeforces::new()
            .with_user("tourist", Some(3800))
            .with_response("user.rating?handle=ghost", failed_body(&handle_not_found_comment("ghost")));

        let users = fake.user_info(&[Handle::from("tourist")]).await.unwrap();
        assert_eq!(users[0].rating, Some(3800));

        let error = fake.user_rating(&Handle::from("ghost")).await.unwrap_err();
        assert!(error.is_handle_not_found());

        let error = fake.problemset_problems().await.unwrap_err();
        assert!(matches!(error, CfBotError::Unreachable { .. }));

        assert_eq!(fake.call_count(), 3);
        assert_eq!(fake.calls()[1], "user.rating?handle=ghost");
    }
}
