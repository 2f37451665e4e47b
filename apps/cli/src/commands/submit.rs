//! `signup submit`

use std::process::ExitCode;

use clap::Args;
use signup_client::{Registration, RegistrationClient, register};
use signup_registration::Clock;

use super::FormArgs;
use crate::config::Settings;
use crate::output;

#[derive(Args)]
#[command(args_override_self = true)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub async fn execute(
    args: SubmitArgs,
    settings: &Settings,
    clock: &impl Clock,
) -> anyhow::Result<ExitCode> {
    let candidate = args.form.into_candidate(clock.today());
    let client = RegistrationClient::new(settings.client_config())?;

    let outcome = register(&candidate, clock, &client).await;
    let notice = outcome.notice();

    match outcome {
        Registration::Created { .. } => {
            if let Some(notice) = notice {
                println!("{notice}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Registration::Rejected(errors) => {
            output::print_field_errors(&errors);
            Ok(ExitCode::FAILURE)
        }
        Registration::Failed(error) => {
            tracing::warn!(error = %error, "submission failed");
            eprintln!("{}", error.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
