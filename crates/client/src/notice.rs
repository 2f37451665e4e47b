//! The alert shown after a submission attempt.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "User account successfully created.";
pub const ERROR_MESSAGE: &str = "There was an error creating the account";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Success,
    Error,
}

/// A transient success or error alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub status: NoticeStatus,
    pub message: &'static str,
}

impl Notice {
    /// How long the alert stays up before the form resets it.
    pub const DISMISS_AFTER: Duration = Duration::from_millis(2500);

    pub const fn success() -> Self {
        Self {
            status: NoticeStatus::Success,
            message: SUCCESS_MESSAGE,
        }
    }

    pub const fn error() -> Self {
        Self {
            status: NoticeStatus::Error,
            message: ERROR_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == NoticeStatus::Success
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}
