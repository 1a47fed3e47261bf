//! `macros` — interactive macro-nutrient diary.
//!
//! Opens the diary database, services one menu selection and exits.

mod args;
mod commands;
mod error;
mod prompt;
mod render;

use args::Cli;
use clap::Parser;
use error::CliResult;
use log::error;
use macros_core::{default_log_level, init_logging, open_db};
use prompt::Session;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .map_or_else(default_log_level, |level| level.as_str());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout());
    commands::run(&conn, &mut session)
}
