//! Logging setup errors.

use thiserror::Error;

/// Result alias for logging setup.
pub type LogResult<T> = Result<T, LogError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter `{directives}`: {reason}")]
    Filter { directives: String, reason: String },

    /// The format name is not one of `pretty`, `compact`, `json`.
    #[error("unknown log format `{0}` (expected pretty, compact or json)")]
    UnknownFormat(String),

    /// A global subscriber was already installed.
    #[error("failed to install the log subscriber: {0}")]
    Init(String),
}
