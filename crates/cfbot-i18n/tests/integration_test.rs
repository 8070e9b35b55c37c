//! Integration tests for cfbot-i18n crate.
//!
//! These tests verify the embedded catalogue against the message keys used by the commands.

use cfbot_common::test_utils::init_test_logging;
use cfbot_i18n::{keys, FluentLoader, Messages};
use proptest::prelude::*;

#[test]
fn test_every_key_is_defined() {
    init_test_logging();

    for language in FluentLoader::available_languages() {
        let messages = Messages::new(language).unwrap();
        for key in keys::ALL {
            assert!(messages.has(key), "{language} is missing '{key}'");
        }
    }
}

#[test]
fn test_reply_texts() {
    let messages = Messages::new("en-US").unwrap();

    assert_eq!(
        messages.get(keys::HANDLE_COUNT_INVALID),
        "Number of handles must be between 1 and 5"
    );
    assert_eq!(
        messages.get(keys::API_DENIED),
        "Codeforces API denied the request, please make sure handles are valid."
    );
    assert_eq!(
        messages.get_with_args(keys::ALREADY_TOO_GUD, &[("handle", "Petr".into())]),
        "`Petr` is already too gud"
    );
    assert_eq!(
        messages.get_with_args(keys::RECOMMENDATION_TITLE, &[("index", "B".into()), ("name", "Two Buttons".into())]),
        "B. Two Buttons"
    );
}

#[test]
fn test_chart_labels() {
    let messages = Messages::new("en-US").unwrap();

    assert_eq!(
        messages.get_with_args(keys::RATING_LEGEND, &[("handle", "tourist".into()), ("rating", "3779".into())]),
        "tourist (3779)"
    );
    assert_eq!(
        messages.get_with_args(keys::SOLVED_LEGEND, &[("handle", "tourist".into()), ("count", "42".into())]),
        "tourist: 42"
    );
    assert_eq!(messages.get(keys::SOLVED_TITLE), "Histogram of problems solved on Codeforces");
}

proptest! {
    #[test]
    fn handles_are_never_altered(handle in "[A-Za-z0-9_.-]{3,24}") {
        let messages = Messages::new("en-US").unwrap();
        let text = messages.get_with_args(keys::HANDLE_NOT_FOUND, &[("handle", handle.clone())]);
        prop_assert_eq!(text, format!("Handle not found: `{handle}`"));
    }
}
