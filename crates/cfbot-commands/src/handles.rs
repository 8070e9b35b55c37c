//! Handle argument checks and user-facing API error text.

use cfbot_common::{CfBotError, Handle};
use cfbot_i18n::{keys, Messages};
use tracing::{info, warn};

/// Most handles accepted by the multi-handle commands.
pub const MAX_HANDLES: usize = 5;

/// Checks the handle count, returning the rejection text when out of range.
pub fn validate_handle_count(count: usize, messages: &Messages) -> Result<(), String> {
    if (1..=MAX_HANDLES).contains(&count) {
        Ok(())
    } else {
        Err(messages.get(keys::HANDLE_COUNT_INVALID))
    }
}

/// Converts raw command arguments into handles.
pub fn parse_handles(args: Vec<String>) -> Vec<Handle> {
    args.into_iter().map(Handle::from).collect()
}

/// Reply text for a failed API call made on behalf of `handle`.
pub fn describe_api_error(error: &CfBotError, handle: &Handle, messages: &Messages) -> String {
    match error {
        CfBotError::Unreachable { .. } | CfBotError::Network { .. } => {
            messages.get(keys::API_UNREACHABLE)
        }
        CfBotError::Codeforces { .. } if error.is_handle_not_found() => {
            messages.get_with_args(keys::HANDLE_NOT_FOUND, &[("handle", handle.to_string())])
        }
        CfBotError::Codeforces { comment } => {
            info!("CF API denied request with comment {comment}");
            messages.get(keys::API_DENIED)
        }
        other => {
            warn!("Unexpected Codeforces API failure for {handle}: {other}");
            messages.get(keys::API_UNEXPECTED_RESPONSE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Messages {
        Messages::new("en-US").unwrap()
    }

    #[test]
    fn test_handle_count_bounds() {
        let messages = messages();
        assert!(validate_handle_count(0, &messages).is_err());
        assert!(validate_handle_count(1, &messages).is_ok());
        assert!(validate_handle_count(5, &messages).is_ok());
        assert_eq!(
            validate_handle_count(6, &messages).unwrap_err(),
            "Number of handles must be between 1 and 5"
        );
    }

    #[test]
    fn test_error_texts() {
        let messages = messages();
        let handle = Handle::from("ghost");

        assert_eq!(
            describe_api_error(&CfBotError::unreachable("down"), &handle, &messages),
            "Error connecting to Codeforces API"
        );
        assert_eq!(
            describe_api_error(
                &CfBotError::codeforces("handle: User with handle ghost not found"),
                &handle,
                &messages
            ),
            "Handle not found: `ghost`"
        );
        assert_eq!(
            describe_api_error(&CfBotError::codeforces("Call limit exceeded"), &handle, &messages),
            "Codeforces API denied the request, please make sure handles are valid."
        );
        assert_eq!(
            describe_api_error(&CfBotError::graph("odd"), &handle, &messages),
            "Codeforces API returned an unexpected response"
        );
    }
}
