//! `gitgud`: recommends an unsolved problem at the user's rating.

use crate::framework::{Context, Error};
use crate::handles::describe_api_error;
use crate::recommend::{candidate_problems, pick_unsolved, rating_bucket, solved_problems};
use crate::reply::{ProblemReply, Reply, EMBED_TITLE_LIMIT};
use cfbot_common::{truncate_string, CodeforcesApi, Handle};
use cfbot_config::CodeforcesConfig;
use cfbot_i18n::{keys, Messages};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Builds the recommendation reply for `handle`.
///
/// Fetches the problem set, the user's rating and the user's submissions in
/// that order, then the name of the chosen problem's contest. Any failed call
/// ends the command with an error reply.
#[instrument(skip(api, codeforces, messages, rng))]
pub async fn recommend_problem<R: Rng + Send + ?Sized>(
    api: &dyn CodeforcesApi,
    codeforces: &CodeforcesConfig,
    messages: &Messages,
    handle: &Handle,
    rng: &mut R,
) -> Reply {
    let problemset = match api.problemset_problems().await {
        Ok(problemset) => problemset,
        Err(e) => return Reply::Text(describe_api_error(&e, handle, messages)),
    };

    let user = match api.user_info(std::slice::from_ref(handle)).await {
        Ok(users) => users.into_iter().next(),
        Err(e) => return Reply::Text(describe_api_error(&e, handle, messages)),
    };
    let Some(user) = user else {
        return Reply::Text(
            messages.get_with_args(keys::HANDLE_NOT_FOUND, &[("handle", handle.to_string())]),
        );
    };

    let submissions = match api.user_status(handle).await {
        Ok(submissions) => submissions,
        Err(e) => return Reply::Text(describe_api_error(&e, handle, messages)),
    };

    let bucket = rating_bucket(user.rating);
    let candidates = candidate_problems(&problemset.problems, bucket);
    let solved = solved_problems(&submissions);
    debug!(bucket, candidates = candidates.len(), solved = solved.len(), "Recommendation pool");

    let Some((key, location)) = pick_unsolved(candidates, &solved, rng) else {
        return Reply::Text(
            messages.get_with_args(keys::ALREADY_TOO_GUD, &[("handle", handle.to_string())]),
        );
    };

    let standings = match api.contest_standings(location.contest_id, 1, 1).await {
        Ok(standings) => standings,
        Err(e) => return Reply::Text(describe_api_error(&e, handle, messages)),
    };

    let rating_line =
        messages.get_with_args(keys::RECOMMENDATION_RATING, &[("rating", key.rating.to_string())]);

    let title = messages.get_with_args(
        keys::RECOMMENDATION_TITLE,
        &[("index", location.index.clone()), ("name", key.name.clone())],
    );

    Reply::Problem(ProblemReply {
        content: messages.get_with_args(keys::RECOMMENDED_PROBLEM, &[("handle", handle.to_string())]),
        title: truncate_string(&title, EMBED_TITLE_LIMIT),
        url: codeforces.problem_url(location.contest_id, &location.index),
        description: format!("{}\n{rating_line}", standings.contest.name),
    })
}

/// Recommend a problem you have not solved yet, at your rating.
#[poise::command(prefix_command, slash_command)]
pub async fn gitgud(
    ctx: Context<'_>,
    #[description = "Codeforces handle"] handle: String,
) -> Result<(), Error> {
    let data = ctx.data();
    let handle = Handle::from(handle);
    let mut rng = StdRng::from_entropy();

    ctx.defer_or_broadcast().await?;
    let reply = recommend_problem(
        data.codeforces.as_ref(),
        &data.config.codeforces,
        data.messages.as_ref(),
        &handle,
        &mut rng,
    )
    .await;

    reply.send(ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfbot_common::test_utils::{
        failed_body, handle_not_found_comment, problem_json, submission_json, FakeCodeforces,
    };

    fn messages() -> Messages {
        Messages::new("en-US").unwrap()
    }

    fn problemset() -> Vec<serde_json::Value> {
        vec![
            problem_json(Some(1520), "C", "Not Adjacent Matrix", Some(1000), &["constructive algorithms"]),
            problem_json(Some(1521), "A", "Solved Already", Some(1000), &[]),
            problem_json(Some(1522), "B", "Too Hard", Some(2400), &[]),
            problem_json(Some(1523), "Z", "April Fools", Some(1000), &["*special"]),
        ]
    }

    async fn run(api: &FakeCodeforces, handle: &str) -> Reply {
        let mut rng = StdRng::seed_from_u64(1);
        recommend_problem(api, &CodeforcesConfig::default(), &messages(), &Handle::from(handle), &mut rng).await
    }

    #[tokio::test]
    async fn test_recommends_only_unsolved_candidate() {
        let api = FakeCodeforces::new()
            .with_problemset(problemset())
            .with_user("alice", Some(1040))
            .with_submissions(
                "alice",
                vec![submission_json(1, problem_json(Some(1521), "A", "Solved Already", Some(1000), &[]), Some("OK"))],
            )
            .with_contest(1520, "Codeforces Round #720 (Div. 2)");

        let reply = run(&api, "alice").await;
        assert_eq!(
            reply,
            Reply::Problem(ProblemReply {
                content: "Recommended problem for `alice`".to_string(),
                title: "C. Not Adjacent Matrix".to_string(),
                url: "https://codeforces.com/contest/1520/problem/C".to_string(),
                description: "Codeforces Round #720 (Div. 2)\nRating: 1000".to_string(),
            })
        );
        assert_eq!(
            api.calls(),
            vec![
                "problemset.problems",
                "user.info?handles=alice",
                "user.status?handle=alice",
                "contest.standings?contestId=1520",
            ]
        );
    }

    #[tokio::test]
    async fn test_already_too_gud() {
        let api = FakeCodeforces::new()
            .with_problemset(problemset())
            .with_user("bob", Some(2400))
            .with_submissions(
                "bob",
                vec![submission_json(9, problem_json(Some(1522), "B", "Too Hard", Some(2400), &[]), Some("OK"))],
            );

        let reply = run(&api, "bob").await;
        assert_eq!(reply.text(), Some("`bob` is already too gud"));
        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn test_unrated_user_gets_500_bucket() {
        let api = FakeCodeforces::new()
            .with_problemset(vec![problem_json(Some(4), "A", "Easy", Some(500), &[])])
            .with_user("newcomer", None)
            .with_submissions("newcomer", vec![])
            .with_contest(4, "Round 4");

        match run(&api, "newcomer").await {
            Reply::Problem(problem) => assert_eq!(problem.title, "A. Easy"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_handle() {
        let api = FakeCodeforces::new()
            .with_problemset(problemset())
            .with_response("user.info?handles=ghost", failed_body(&handle_not_found_comment("ghost")));

        let reply = run(&api, "ghost").await;
        assert_eq!(reply.text(), Some("Handle not found: `ghost`"));
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_api() {
        let api = FakeCodeforces::new();
        let reply = run(&api, "alice").await;
        assert_eq!(reply.text(), Some("Error connecting to Codeforces API"));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_same_seed_same_recommendation() {
        let problems: Vec<_> = (1..=30)
            .map(|i| problem_json(Some(i), "A", &format!("Problem {i}"), Some(1500), &[]))
            .collect();
        let api = FakeCodeforces::new()
            .with_problemset(problems)
            .with_user("carol", Some(1480))
            .with_submissions("carol", vec![]);
        let api = (1..=30).fold(api, |api, i| api.with_contest(i, &format!("Round {i}")));

        let first = run(&api, "carol").await;
        let second = run(&api, "carol").await;
        assert!(matches!(first, Reply::Problem(_)));
        assert_eq!(first, second);
    }
}
