//! Environment lookup and named presets.

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Reads the process environment.
    ///
    /// Reads `SIGNUP_LOG` (or `RUST_LOG`) and `SIGNUP_LOG_FORMAT`. An
    /// unrecognised format leaves the default in place.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("SIGNUP_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("SIGNUP_LOG_FORMAT").and_then(|f| f.parse().ok()) {
            config.format = format;
        }
        if config.format == Format::Json {
            config.display.colors = false;
        }

        config
    }

    /// Local runs: `debug`, pretty output with source locations.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Deployed runs: `info`, JSON without colors.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test runs: `trace`, compact lines without colors or timestamps.
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_owned(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
