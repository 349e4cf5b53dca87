//! Utility helpers: log-friendly truncation and JSON answer checks.

use tracing::warn;

/// Truncate a string to `max_len` characters, adding "..." if truncated.
/// Unicode-safe.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Check that an answer requested in JSON mode actually parses as JSON.
///
/// Logs a warning when it does not. Returns whether the text is valid JSON;
/// callers still hand the raw text back either way.
pub fn check_json_answer(text: &str, provider: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => true,
        Err(e) => {
            warn!(
                provider,
                error = %e,
                "json_mode was requested but response is not valid JSON"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_string("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate_string("hello world, this is a long string", 15);
        assert_eq!(result, "hello world,...");
        assert!(result.len() <= 15);
    }

    #[test]
    fn test_truncate_unicode() {
        let result = truncate_string("こんにちは世界です", 5);
        assert_eq!(result, "こん...");
    }

    #[test]
    fn test_check_json_answer() {
        assert!(check_json_answer(r#"{"answer": 4}"#, "Gemini"));
        assert!(check_json_answer("[1, 2]", "Gemini"));
        assert!(!check_json_answer("The answer is 4.", "Gemini"));
    }
}
