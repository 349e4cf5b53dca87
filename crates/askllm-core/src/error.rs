//! Failure taxonomy shared by every provider client.
//!
//! Clients never panic or propagate transport errors directly; every failure is
//! logged and surfaced as one of these variants.

/// Result of a single ask call.
pub type AskResult<T> = Result<T, AskError>;

/// Why a call produced no answer.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// Required API key is not set.
    #[error("{var} not found in environment variables")]
    MissingApiKey {
        /// Name of the environment variable that should hold the key.
        var: &'static str,
    },

    /// The prompt was empty.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The API key cannot be sent as an HTTP header value.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// Connection or I/O failure before a complete response was read.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The request exceeded its timeout.
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON we expected.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The JSON was valid but the answer text was not where it should be.
    #[error("response is missing {0}")]
    MissingField(&'static str),
}

impl AskError {
    /// Short label for the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AskError::MissingApiKey { .. } | AskError::EmptyPrompt | AskError::InvalidHeader(_) => {
                "config"
            }
            AskError::Transport(_) | AskError::Timeout { .. } => "transport",
            AskError::Status { .. } => "provider",
            AskError::Parse(_) | AskError::MissingField(_) => "parse",
        }
    }
}

impl From<serde_json::Error> for AskError {
    fn from(e: serde_json::Error) -> Self {
        AskError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_variable() {
        let err = AskError::MissingApiKey { var: "GEMINI_API_KEY" };
        assert_eq!(
            err.to_string(),
            "GEMINI_API_KEY not found in environment variables"
        );
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_status_message() {
        let err = AskError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "provider returned 500: boom");
        assert_eq!(err.kind(), "provider");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(AskError::Timeout { secs: 60 }.kind(), "transport");
        assert_eq!(AskError::MissingField("choices").kind(), "parse");
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AskError::from(json_err).kind(), "parse");
    }
}
