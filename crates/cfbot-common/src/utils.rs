//! Shared utility functions.

use chrono::{DateTime, TimeZone, Utc};

/// Converts a Codeforces unix timestamp (seconds) to a UTC datetime.
pub fn datetime_from_unix(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_from_unix() {
        let timestamp = datetime_from_unix(1_704_110_400).unwrap();
        assert_eq!(timestamp.to_rfc3339(), "2024-01-01T12:00:00+00:00");
    }

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        assert_eq!(truncate_string(input, 20), "This is a very lo...");
        assert_eq!(truncate_string("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }
}
