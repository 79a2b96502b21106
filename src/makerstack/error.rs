use thiserror::Error;

/// Inline form errors. These never reach the network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    Required,

    #[error("Please enter a valid email address")]
    Malformed,
}

/// Failures of the newsletter request itself, surfaced as a dismissible notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Subscription request timed out")]
    TimedOut,

    #[error("Subscription rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum MakerError {
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MakerError>;
