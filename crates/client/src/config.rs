//! Client settings.

use std::time::Duration;

use url::Url;

/// The create-user endpoint the form posts to.
pub const DEFAULT_ENDPOINT: &str = "https://fullstack-test-navy.vercel.app/api/users/create";

/// Upper bound on one submission, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("signup/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
