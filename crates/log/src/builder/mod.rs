//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// Events logged while the guard is alive are recorded inside the
/// `app` span carrying the configured service name.
#[derive(Debug)]
pub struct LoggerGuard {
    #[allow(dead_code)]
    root_span: Option<tracing::span::EnteredSpan>,
    format: Format,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            directives: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if the filter cannot be parsed or a subscriber is
    /// already installed.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let fmt_layer = match self.config.format {
            Format::Pretty => create_fmt_layer!(pretty, display),
            Format::Compact => create_fmt_layer!(compact, display),
            Format::Json => create_json_layer!(display),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            root_span,
            format: self.config.format,
        })
    }
}

impl LoggerGuard {
    /// Format of the installed subscriber.
    pub fn format(&self) -> Format {
        self.format
    }
}
