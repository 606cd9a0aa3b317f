use thiserror::Error;

/// Failures while turning raw input into a `ReviewRecord`.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("review record must be a JSON object")]
    NotAnObject,

    #[error("review record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("review record is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Failures talking to the completion service. All of these end up as the
/// fallback recommendation.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion response contained no message content")]
    EmptyChoices,
}

/// Input-side failures. These propagate to the caller instead of producing a
/// fallback recommendation.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("failed to render recommendation prompt: {0}")]
    Template(#[from] tera::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },

    #[error("failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
