//! mapgate: validate a map against a directory of rule files.

use std::process::ExitCode;

use clap::Parser;
use mapgate_core::errors::{MapgateErrorCode, RunError};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    mapgate_core::tracing::init_tracing();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Check(args) => commands::check(&cli.root, args),
        Commands::Catalog(args) => commands::catalog(&cli.root, args).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            match err.downcast_ref::<RunError>() {
                Some(run_err) => eprintln!("error: {}", run_err.coded_string()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
