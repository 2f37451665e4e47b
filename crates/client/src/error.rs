//! Submission failures.

use thiserror::Error;

use crate::notice::ERROR_MESSAGE;

/// Why a registration did not reach a successful response.
///
/// Only the generic [`user_message`](Self::user_message) is shown to the
/// user; the details are for logs.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request did not complete (connection, timeout, TLS).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint answered {status}")]
    Status { status: u16, body: String },
}

impl SubmitError {
    /// The message shown to the user for any submission failure.
    pub fn user_message(&self) -> &'static str {
        ERROR_MESSAGE
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
