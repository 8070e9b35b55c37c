//! Integration tests for cfbot-commands crate.
//!
//! These tests drive the command logic against canned Codeforces responses,
//! without a Discord connection.

use cfbot_commands::gitgud::recommend_problem;
use cfbot_commands::rating::rating_chart;
use cfbot_commands::solved::solved_histogram;
use cfbot_commands::{commands, Reply};
use cfbot_common::test_utils::{
    init_test_logging, problem_json, rating_change_json, submission_json, FakeCodeforces,
};
use cfbot_common::Handle;
use cfbot_config::Config;
use cfbot_i18n::Messages;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fake() -> FakeCodeforces {
    FakeCodeforces::new()
        .with_problemset(vec![
            problem_json(Some(1700), "B", "Nearest Point", Some(1500), &["greedy"]),
            problem_json(Some(1701), "C", "Another Point", Some(1500), &["math"]),
        ])
        .with_user("tourist", Some(1520))
        .with_submissions(
            "tourist",
            vec![submission_json(
                10,
                problem_json(Some(1701), "C", "Another Point", Some(1500), &["math"]),
                Some("OK"),
            )],
        )
        .with_rating_history(
            "tourist",
            vec![
                rating_change_json("tourist", 1, 1_500_000_000, 1500, 1450),
                rating_change_json("tourist", 2, 1_500_600_000, 1450, 1520),
            ],
        )
        .with_contest(1700, "Codeforces Round (Div. 2)")
}

#[tokio::test]
async fn test_all_commands_against_one_account() {
    init_test_logging();

    let api = fake();
    let messages = Messages::new("en-US").unwrap();
    let mut config = Config::default();
    config.codeforces.contest_url = "https://mirror.codeforces.com/contest/".to_string();
    let handle = Handle::from("tourist");

    let mut rng = StdRng::seed_from_u64(3);
    match recommend_problem(&api, &config.codeforces, &messages, &handle, &mut rng).await {
        Reply::Problem(problem) => {
            assert_eq!(problem.title, "B. Nearest Point");
            assert_eq!(problem.url, "https://mirror.codeforces.com/contest/1700/problem/B");
        }
        other => panic!("unexpected reply: {other:?}"),
    }

    match rating_chart(&api, &messages, std::slice::from_ref(&handle)).await {
        Reply::RatingChart(chart) => {
            assert_eq!(chart.lines[0].label, "tourist (1520)");
            assert_eq!(chart.y_range(), Some((1400, 1570)));
        }
        other => panic!("unexpected reply: {other:?}"),
    }

    match solved_histogram(&api, &messages, std::slice::from_ref(&handle)).await {
        Reply::SolvedChart(histogram) => {
            assert_eq!(histogram.series[0].label, "tourist: 1");
            assert_eq!(histogram.counts()[0].iter().sum::<u32>(), 1);
        }
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn test_command_names() {
    let names: Vec<_> = commands().into_iter().map(|command| command.name).collect();
    assert!(names.iter().any(|name| name == "gitgud"));
    assert!(names.iter().any(|name| name == "rating"));
    assert!(names.iter().any(|name| name == "solved"));
}
