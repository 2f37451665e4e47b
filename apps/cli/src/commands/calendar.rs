//! `signup days` and `signup years`

use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use signup_registration::{Clock, Month, clamp_day, day_options, year_options};

#[derive(Args)]
pub struct DaysArgs {
    #[arg(long)]
    pub year: i32,

    /// Month abbreviation (Jan … Dec)
    #[arg(long)]
    pub month: String,

    /// A previously selected day; prints where it lands in this month
    #[arg(long)]
    pub day: Option<u32>,
}

pub fn days(args: DaysArgs) -> anyhow::Result<ExitCode> {
    let month: Month = args.month.parse().context("invalid --month")?;

    if let Some(day) = args.day {
        println!("{}", clamp_day(day, args.year, month));
        return Ok(ExitCode::SUCCESS);
    }

    let options: Vec<String> = day_options(args.year, month).map(|d| d.to_string()).collect();
    println!("{}", options.join(" "));
    Ok(ExitCode::SUCCESS)
}

pub fn years(clock: &impl Clock) -> ExitCode {
    for year in year_options(clock.today()) {
        println!("{year}");
    }
    ExitCode::SUCCESS
}
