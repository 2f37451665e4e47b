//! `signup validate`

use std::process::ExitCode;

use clap::Args;
use signup_registration::{Clock, validate};

use super::FormArgs;
use crate::output;

#[derive(Args)]
#[command(args_override_self = true)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print field errors as a JSON object on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ValidateArgs, clock: &impl Clock) -> anyhow::Result<ExitCode> {
    let candidate = args.form.into_candidate(clock.today());

    match validate(&candidate, clock) {
        Ok(record) => {
            output::print_json(&record)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            if args.json {
                output::print_json(&errors)?;
            } else {
                output::print_field_errors(&errors);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
