//! Validate, then submit.

use reqwest::StatusCode;
use signup_registration::{Clock, FieldErrors, NormalizedRecord, RegistrationCandidate, validate};

use crate::client::RegistrationClient;
use crate::error::SubmitError;
use crate::notice::Notice;

/// Outcome of one registration attempt.
#[derive(Debug)]
pub enum Registration {
    /// The endpoint accepted the record with a 2xx `status`.
    Created {
        record: NormalizedRecord,
        status: StatusCode,
    },
    /// Validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// The record was valid but the submission failed.
    Failed(SubmitError),
}

impl Registration {
    /// The alert to show, if any.
    ///
    /// Field errors are shown inline instead. An accepted submission only
    /// gets the success alert on a plain 200.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Created { status, .. } => (*status == StatusCode::OK).then(Notice::success),
            Self::Failed(_) => Some(Notice::error()),
            Self::Rejected(_) => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Validates `candidate` and posts it when every rule passes.
pub async fn register<C: Clock + ?Sized>(
    candidate: &RegistrationCandidate,
    clock: &C,
    client: &RegistrationClient,
) -> Registration {
    let record = match validate(candidate, clock) {
        Ok(record) => record,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "registration not submitted");
            return Registration::Rejected(errors);
        }
    };

    match client.submit(&record).await {
        Ok(status) => Registration::Created { record, status },
        Err(error) => Registration::Failed(error),
    }
}
