use thiserror::Error;

/// Typed error hierarchy for slack-moderator.
///
/// Use at module boundaries (config validation, Slack calls, payload and
/// metadata decoding). The loader and CLI wrap it in `anyhow` context.
#[derive(Debug, Error)]
pub enum ModeratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Slack answered with `ok: false` (or a non-2xx status for webhook and
    /// response URL posts).
    #[error("Slack API error: {method}: {error}")]
    SlackApi { method: String, error: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Inbound request body that is not a usable interaction payload.
    #[error("Invalid interaction payload: {0}")]
    Payload(String),

    #[error("Invalid report metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Invalid message timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: std::num::ParseFloatError,
    },
}

/// Convenience alias for results using `ModeratorError`.
pub type ModeratorResult<T> = std::result::Result<T, ModeratorError>;

impl ModeratorError {
    pub fn slack_api(method: impl Into<String>, error: impl Into<String>) -> Self {
        Self::SlackApi {
            method: method.into(),
            error: error.into(),
        }
    }

    /// Whether the failure is transient. Nothing is retried; this only
    /// decides how loudly a failure is logged.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::SlackApi { error, .. } => {
                matches!(error.as_str(), "ratelimited" | "internal_error" | "fatal_error")
                    || error.starts_with("status 5")
            }
            Self::Config(_)
            | Self::Payload(_)
            | Self::Metadata(_)
            | Self::Timestamp { .. } => false,
        }
    }
}
