//! HTTP submission.

use reqwest::StatusCode;
use signup_registration::NormalizedRecord;

use crate::config::ClientConfig;
use crate::error::SubmitError;

/// Posts normalized records to the configured endpoint.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RegistrationClient {
    pub fn new(config: ClientConfig) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(SubmitError::Build)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends `record` as JSON in a single POST.
    ///
    /// Any 2xx status is an accepted submission and is returned as is.
    #[tracing::instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    pub async fn submit(&self, record: &NormalizedRecord) -> Result<StatusCode, SubmitError> {
        tracing::debug!("submitting registration");

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .json(record)
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(error = %source, "registration request failed");
                SubmitError::Transport {
                    endpoint: self.config.endpoint.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "registration accepted");
            return Ok(status);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "registration refused");
        Err(SubmitError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
