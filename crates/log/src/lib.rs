//! # signup-log
//!
//! Logging bootstrap shared by the signup tools.
//!
//! Events are emitted with [`tracing`] everywhere; this crate only wires up
//! the subscriber: an `EnvFilter` plus one fmt layer in
//! [`Format::Pretty`], [`Format::Compact`] or [`Format::Json`], written to
//! stderr so that stdout stays free for command output.
//!
//! ```rust,no_run
//! use signup_log::{Config, LoggerBuilder};
//!
//! let _guard = LoggerBuilder::from_config(Config::from_env()).build()?;
//! tracing::info!("ready");
//! # Ok::<(), signup_log::LogError>(())
//! ```
//!
//! ## Environment
//!
//! - `SIGNUP_LOG` (falling back to `RUST_LOG`): filter directives, e.g. `debug`
//!   or `signup_client=trace,info`.
//! - `SIGNUP_LOG_FORMAT`: `pretty`, `compact` or `json`.

pub mod builder;
pub mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initializes logging from the environment.
pub fn init() -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(Config::from_env()).build()
}

/// Initializes logging from an explicit configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
