//! signup - drive the registration form from the command line
//!
//! - `validate`: check a form and print the normalized record
//! - `submit`: validate, then post to the create-user endpoint
//! - `days` / `years`: the birth-date picker options

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use signup_log::Format;
use signup_registration::{Clock, FixedClock, SystemClock};
use url::Url;

mod commands;
mod config;
mod output;

use config::{Overrides, Settings};

/// Registration form validator and submitter
#[derive(Parser)]
#[command(name = "signup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_override_self = true)]
struct Cli {
    /// Config file (defaults to ./signup.toml when present)
    #[arg(long, global = true, env = "SIGNUP_CONFIG")]
    config: Option<PathBuf>,

    /// Create-user endpoint
    #[arg(long, global = true)]
    endpoint: Option<Url>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log filter directives, e.g. `debug`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format: pretty, compact or json
    #[arg(long, global = true)]
    log_format: Option<Format>,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, global = true, hide = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a registration form
    Validate(commands::validate::ValidateArgs),

    /// Validate and submit a registration form
    Submit(commands::submit::SubmitArgs),

    /// List the days offered for a month
    Days(commands::calendar::DaysArgs),

    /// List the years offered by the birth-year picker
    Years,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let overrides = Overrides {
        endpoint: cli.endpoint,
        timeout_secs: cli.timeout_secs,
        log_level: cli.log_level,
        log_format: cli.log_format,
    };
    let settings = Settings::load(cli.config.as_deref(), &overrides)?;
    let _log_guard = signup_log::init_with(settings.log_config())?;
    tracing::debug!(endpoint = %settings.endpoint, "settings loaded");

    let clock = FixedClock::new(cli.today.unwrap_or_else(|| SystemClock.today()));

    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args, &clock),
        Commands::Submit(args) => commands::submit::execute(args, &settings, &clock).await,
        Commands::Days(args) => commands::calendar::days(args),
        Commands::Years => Ok(commands::calendar::years(&clock)),
    }
}
