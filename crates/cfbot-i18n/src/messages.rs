//! Message lookup and formatting.

use crate::loader::{Bundle, FluentLoader};
use cfbot_common::Result;
use fluent_bundle::FluentArgs;
use tracing::warn;

/// Message identifiers defined in the catalogue.
pub mod keys {
    /// Wrong number of handles passed to a command.
    pub const HANDLE_COUNT_INVALID: &str = "handle-count-invalid";
    /// Transport failure talking to Codeforces.
    pub const API_UNREACHABLE: &str = "api-unreachable";
    /// `FAILED` payload naming a missing handle. Takes `handle`.
    pub const HANDLE_NOT_FOUND: &str = "handle-not-found";
    /// Any other `FAILED` payload.
    pub const API_DENIED: &str = "api-denied";
    /// Body that is not a valid API envelope.
    pub const API_UNEXPECTED_RESPONSE: &str = "api-unexpected-response";
    /// Handle that was never rated. Takes `handle`.
    pub const NO_RATING_HISTORY: &str = "no-rating-history";
    /// Nothing left to recommend. Takes `handle`.
    pub const ALREADY_TOO_GUD: &str = "already-too-gud";
    /// Recommendation reply text. Takes `handle`.
    pub const RECOMMENDED_PROBLEM: &str = "recommended-problem";
    /// Recommendation embed title. Takes `index` and `name`.
    pub const RECOMMENDATION_TITLE: &str = "recommendation-title";
    /// Recommendation embed rating line. Takes `rating`.
    pub const RECOMMENDATION_RATING: &str = "recommendation-rating";
    /// Rating chart legend entry. Takes `handle` and `rating`.
    pub const RATING_LEGEND: &str = "rating-legend";
    /// Solved histogram title.
    pub const SOLVED_TITLE: &str = "solved-title";
    /// Solved histogram x axis label.
    pub const SOLVED_X_LABEL: &str = "solved-x-label";
    /// Solved histogram y axis label.
    pub const SOLVED_Y_LABEL: &str = "solved-y-label";
    /// Solved histogram legend entry. Takes `handle` and `count`.
    pub const SOLVED_LEGEND: &str = "solved-legend";
    /// Generic failure reported by the error hook.
    pub const COMMAND_FAILED: &str = "command-failed";
    /// Footer of the help listing.
    pub const HELP_FOOTER: &str = "help-footer";

    /// Every key, for completeness checks.
    pub const ALL: [&str; 17] = [
        HANDLE_COUNT_INVALID,
        API_UNREACHABLE,
        HANDLE_NOT_FOUND,
        API_DENIED,
        API_UNEXPECTED_RESPONSE,
        NO_RATING_HISTORY,
        ALREADY_TOO_GUD,
        RECOMMENDED_PROBLEM,
        RECOMMENDATION_TITLE,
        RECOMMENDATION_RATING,
        RATING_LEGEND,
        SOLVED_TITLE,
        SOLVED_X_LABEL,
        SOLVED_Y_LABEL,
        SOLVED_LEGEND,
        COMMAND_FAILED,
        HELP_FOOTER,
    ];
}

/// Loaded message catalogue for one language.
pub struct Messages {
    language: String,
    bundle: Bundle,
}

impl std::fmt::Debug for Messages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messages")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Messages {
    /// Loads the catalogue for `language`, falling back to the default one.
    pub fn new(language: &str) -> Result<Self> {
        let resolved = FluentLoader::resolve_language(language);
        Ok(Self {
            language: resolved.to_string(),
            bundle: FluentLoader::load_bundle(resolved)?,
        })
    }

    /// Language the catalogue was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the catalogue defines `key`.
    pub fn has(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Gets a localized message.
    pub fn get(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Gets a localized message with arguments.
    pub fn get_with_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|m| m.value()) else {
            warn!("Message '{key}' not found in {} catalogue", self.language);
            return key.to_string();
        };

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!("Formatting errors for message '{key}': {errors:?}");
        }
        formatted.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Messages {
        Messages::new("en-US").unwrap()
    }

    #[test]
    fn test_plain_message() {
        assert_eq!(
            messages().get(keys::API_UNREACHABLE),
            "Error connecting to Codeforces API"
        );
    }

    #[test]
    fn test_handle_renders_verbatim() {
        let text = messages().get_with_args(keys::HANDLE_NOT_FOUND, &[("handle", "tourist".into())]);
        assert_eq!(text, "Handle not found: `tourist`");
    }

    #[test]
    fn test_help_footer() {
        assert_eq!(messages().get(keys::HELP_FOOTER), "Handles are Codeforces usernames.");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(messages().get("no-such-message"), "no-such-message");
    }

    #[test]
    fn test_fallback_language() {
        let messages = Messages::new("fr-FR").unwrap();
        assert_eq!(messages.language(), "en-US");
    }
}
