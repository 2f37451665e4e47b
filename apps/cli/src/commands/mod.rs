//! Subcommands.

pub mod calendar;
pub mod submit;
pub mod validate;

use chrono::NaiveDate;
use clap::Args;
use signup_registration::RegistrationCandidate;

/// The form inputs. Birth-date inputs default to today, like the pickers.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,

    #[arg(long, default_value = "")]
    pub contact_number: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true, default_value = "")]
    pub password: String,

    #[arg(long, env = "SIGNUP_CONFIRM_PASSWORD", hide_env_values = true, default_value = "")]
    pub confirm_password: String,

    /// Day of month
    #[arg(long)]
    pub day: Option<String>,

    /// Month abbreviation (Jan … Dec)
    #[arg(long)]
    pub month: Option<String>,

    #[arg(long)]
    pub year: Option<String>,
}

impl FormArgs {
    pub fn into_candidate(self, today: NaiveDate) -> RegistrationCandidate {
        let defaults = RegistrationCandidate::with_today(today);
        RegistrationCandidate {
            full_name: self.full_name,
            contact_number: self.contact_number,
            email: self.email,
            password: self.password,
            confirm_password: self.confirm_password,
            day: self.day.unwrap_or(defaults.day),
            month: self.month.unwrap_or(defaults.month),
            year: self.year.unwrap_or(defaults.year),
        }
    }
}
