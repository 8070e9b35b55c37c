//! Problem recommendation: rating buckets and candidate selection.

use cfbot_common::{Problem, ProblemKey, ProblemLocation, Submission};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

/// Rating assumed for users that have never been rated.
pub const UNRATED_RATING: i32 = 500;

/// Rounds a rating to the nearest hundred, halves rounding up.
pub const fn round_rating(rating: i32) -> i32 {
    let remainder = rating.rem_euclid(100);
    if remainder >= 50 {
        rating - remainder + 100
    } else {
        rating - remainder
    }
}

/// Rating bucket for a user's current rating.
pub const fn rating_bucket(rating: Option<i32>) -> i32 {
    match rating {
        Some(rating) => round_rating(rating),
        None => round_rating(UNRATED_RATING),
    }
}

/// Rated, non-special problems at exactly `bucket` that belong to a contest.
pub fn candidate_problems(problems: &[Problem], bucket: i32) -> BTreeMap<ProblemKey, ProblemLocation> {
    problems
        .iter()
        .filter(|problem| !problem.is_special() && problem.rating == Some(bucket))
        .filter_map(|problem| Some((problem.key()?, problem.location()?)))
        .collect()
}

/// Distinct (name, rating) pairs of accepted, rated submissions.
pub fn solved_problems(submissions: &[Submission]) -> BTreeSet<ProblemKey> {
    submissions.iter().filter_map(Submission::solved_key).collect()
}

/// Drops solved problems from `candidates` and picks one of the rest uniformly.
pub fn pick_unsolved<R: Rng + ?Sized>(
    mut candidates: BTreeMap<ProblemKey, ProblemLocation>,
    solved: &BTreeSet<ProblemKey>,
    rng: &mut R,
) -> Option<(ProblemKey, ProblemLocation)> {
    candidates.retain(|key, _| !solved.contains(key));
    candidates.into_iter().choose(rng)
}
