//! Codeforces API response models.
//!
//! Only the fields the bot reads are modelled; everything else in the payload
//! is ignored by serde.

use crate::error::{CfBotError, Result};
use crate::types::{ProblemKey, ProblemLocation};
use serde::{Deserialize, Serialize};

/// Verdict of an accepted submission.
pub const VERDICT_OK: &str = "OK";

/// Tag carried by problems that are not regular judged problems (April Fools, etc).
pub const SPECIAL_TAG: &str = "*special";

// ============================================================================
// Envelope
// ============================================================================

/// Outcome reported in the `status` field of every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    /// The call succeeded and `result` is present.
    Ok,
    /// The call was rejected and `comment` explains why.
    Failed,
}

/// Base response wrapper for all Codeforces API calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    /// Result status.
    pub status: ApiStatus,
    /// Rejection reason, present when `status` is `FAILED`.
    pub comment: Option<String>,
    /// Payload, present when `status` is `OK`.
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Turn the envelope into the payload or a [`CfBotError::Codeforces`].
    pub fn into_result(self) -> Result<T> {
        match (self.status, self.result) {
            (ApiStatus::Ok, Some(result)) => Ok(result),
            (ApiStatus::Ok, None) => Err(CfBotError::codeforces("response contained no result")),
            (ApiStatus::Failed, _) => Err(CfBotError::codeforces(
                self.comment.unwrap_or_else(|| "request failed".to_string()),
            )),
        }
    }
}

// ============================================================================
// Problems
// ============================================================================

/// A problem as listed by `problemset.problems` or embedded in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Contest the problem belongs to. Absent for some acmsguru problems.
    pub contest_id: Option<u32>,
    /// Problem index within the contest, e.g. `"B"` or `"D2"`.
    pub index: String,
    /// Problem name.
    pub name: String,
    /// Difficulty rating, absent for unrated problems.
    pub rating: Option<i32>,
    /// Problem tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    /// Whether the problem carries the `*special` tag.
    pub fn is_special(&self) -> bool {
        self.tags.iter().any(|tag| tag == SPECIAL_TAG)
    }

    /// The (name, rating) identity of the problem, if it is rated.
    pub fn key(&self) -> Option<ProblemKey> {
        self.rating.map(|rating| ProblemKey::new(self.name.clone(), rating))
    }

    /// Contest and index of the problem, if it belongs to a contest.
    pub fn location(&self) -> Option<ProblemLocation> {
        self.contest_id.map(|contest_id| ProblemLocation {
            contest_id,
            index: self.index.clone(),
        })
    }
}

/// Result of `problemset.problems`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProblemSet {
    /// Every problem of the problem set.
    pub problems: Vec<Problem>,
}

// ============================================================================
// Users and submissions
// ============================================================================

/// Result entry of `user.info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Codeforces handle.
    pub handle: String,
    /// Current rating, absent for unrated users.
    pub rating: Option<i32>,
    /// Current rank name.
    pub rank: Option<String>,
    /// Maximum rating ever reached.
    pub max_rating: Option<i32>,
}

/// Result entry of `user.status`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Submission id.
    pub id: u64,
    /// Contest the submission was made in.
    pub contest_id: Option<u32>,
    /// Submitted problem.
    pub problem: Problem,
    /// Verdict, absent while the submission is still being judged.
    pub verdict: Option<String>,
}

impl Submission {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(VERDICT_OK)
    }

    /// The (name, rating) key of the problem if this is an accepted, rated submission.
    pub fn solved_key(&self) -> Option<ProblemKey> {
        if self.is_accepted() {
            self.problem.key()
        } else {
            None
        }
    }
}

/// Result entry of `user.rating`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    /// Contest id.
    pub contest_id: u32,
    /// Contest name.
    pub contest_name: String,
    /// Handle the change applies to.
    pub handle: String,
    /// Place in the contest.
    pub rank: u32,
    /// When the rating was updated, unix seconds.
    pub rating_update_time_seconds: i64,
    /// Rating before the contest.
    pub old_rating: i32,
    /// Rating after the contest.
    pub new_rating: i32,
}

// ============================================================================
// Contests
// ============================================================================

/// Contest metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Contest {
    /// Contest id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Result of `contest.standings`; only the contest header is used.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Standings {
    /// The contest the standings belong to.
    pub contest: Contest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_envelope() {
        let json = r#"{"status":"FAILED","comment":"handle: User with handle nobody not found"}"#;
        let response: ApiResponse<Vec<RatingChange>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, ApiStatus::Failed);

        let error = response.into_result().unwrap_err();
        assert!(error.is_handle_not_found());
    }

    #[test]
    fn test_ok_envelope_without_result() {
        let response: ApiResponse<ProblemSet> = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_problem_deserialization() {
        let json = r#"{
            "contestId": 1520,
            "index": "C",
            "name": "Not Adjacent Matrix",
            "type": "PROGRAMMING",
            "rating": 1000,
            "tags": ["constructive algorithms", "*1000"]
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.contest_id, Some(1520));
        assert_eq!(problem.key(), Some(ProblemKey::new("Not Adjacent Matrix", 1000)));
        assert_eq!(
            problem.location(),
            Some(ProblemLocation {
                contest_id: 1520,
                index: "C".to_string()
            })
        );
        assert!(!problem.is_special());
    }

    #[test]
    fn test_unrated_problem_has_no_key() {
        let json = r#"{"index": "A", "name": "Secret", "tags": ["*special"]}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert!(problem.key().is_none());
        assert!(problem.location().is_none());
        assert!(problem.is_special());
    }

    #[test]
    fn test_submission_solved_key() {
        let json = r#"{
            "id": 1,
            "contestId": 4,
            "problem": {"contestId": 4, "index": "A", "name": "Watermelon", "rating": 800, "tags": []},
            "verdict": "OK"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert!(submission.is_accepted());
        assert_eq!(submission.solved_key(), Some(ProblemKey::new("Watermelon", 800)));

        let testing = r#"{
            "id": 2,
            "problem": {"index": "A", "name": "Watermelon", "rating": 800}
        }"#;
        let submission: Submission = serde_json::from_str(testing).unwrap();
        assert!(submission.solved_key().is_none());
    }

    #[test]
    fn test_rating_change_deserialization() {
        let json = r#"{
            "contestId": 1,
            "contestName": "Codeforces Beta Round #1",
            "handle": "tourist",
            "rank": 1,
            "ratingUpdateTimeSeconds": 1266588000,
            "oldRating": 0,
            "newRating": 1602
        }"#;
        let change: RatingChange = serde_json::from_str(json).unwrap();
        assert_eq!(change.new_rating, 1602);
        assert_eq!(change.rating_update_time_seconds, 1_266_588_000);
    }

    #[test]
    fn test_standings_deserialization() {
        let json = r#"{
            "contest": {"id": 566, "name": "VK Cup 2015 - Finals", "type": "CF", "phase": "FINISHED"},
            "problems": [],
            "rows": []
        }"#;
        let standings: Standings = serde_json::from_str(json).unwrap();
        assert_eq!(standings.contest.name, "VK Cup 2015 - Finals");
    }
}
