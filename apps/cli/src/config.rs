//! Layered settings: defaults → `signup.toml` → `SIGNUP_*` env → flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use signup_client::{ClientConfig, DEFAULT_TIMEOUT};
use signup_log::Format;
use url::Url;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "signup.toml";

const ENV_KEYS: [&str; 5] = ["endpoint", "timeout_secs", "user_agent", "log_level", "log_format"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: Url,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Overrides `SIGNUP_LOG` / `RUST_LOG` when set.
    pub log_level: Option<String>,
    pub log_format: Option<Format>,
}

impl Default for Settings {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            endpoint: client.endpoint,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: client.user_agent,
            log_level: None,
            log_format: None,
        }
    }
}

/// Values given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<Format>,
}

impl Settings {
    /// The provider chain, lowest priority first.
    pub fn figment(config_file: Option<&Path>, overrides: &Overrides) -> Figment {
        let file = config_file.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("SIGNUP_").only(&ENV_KEYS))
            .merge(Serialized::defaults(overrides))
    }

    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Self> {
        if let Some(path) = config_file
            && !path.exists()
        {
            anyhow::bail!("config file {} does not exist", path.display());
        }

        Self::figment(config_file, overrides)
            .extract()
            .context("invalid configuration")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent(self.user_agent.clone())
    }

    /// Logging config: environment first, then these settings.
    pub fn log_config(&self) -> signup_log::Config {
        let mut config = signup_log::Config::from_env().with_service("signup");
        if let Some(level) = &self.log_level {
            config.level.clone_from(level);
        }
        if let Some(format) = self.log_format {
            config.format = format;
        }
        config
    }
}
