mod cli;
mod commands;
mod config;
mod error;
mod git;
mod logging;

use clap::Parser;
use cli::{Cli, CommandDispatcher};
use config::{Config, Settings, DISABLE_EMOJIS_ENV};
use error::CitError;
use git::{DryRunGit, GitRunner, ProcessGit};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit here, before any git step runs
    let cli = Cli::parse();

    let (config, config_path) = match Config::load() {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            return ExitCode::FAILURE;
        }
    };
    let settings = Settings::resolve(
        config,
        config_path,
        std::env::var(DISABLE_EMOJIS_ENV).ok().as_deref(),
        cli.verbose,
    );
    logging::init(settings.verbose);
    debug!(?settings, "resolved settings");

    let git: Box<dyn GitRunner> = if cli.dry_run {
        Box::new(DryRunGit::new(settings.executable.clone()))
    } else {
        Box::new(ProcessGit::new(settings.executable.clone()))
    };

    let command = cli.into_command();
    let dispatcher = CommandDispatcher::new(settings, git);

    match dispatcher.dispatch(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

/// Print the user-facing failure line and pick the exit status
fn report_failure(err: &anyhow::Error) -> ExitCode {
    debug!(error = %format!("{:#}", err), "command failed");
    let (message, code) = failure_outcome(err);
    eprintln!("{}", message);
    ExitCode::from(code)
}

/// Message and exit status for a failed dispatch
fn failure_outcome(err: &anyhow::Error) -> (String, u8) {
    match err.downcast_ref::<CitError>() {
        Some(cit_error) => (cit_error.user_message(), cit_error.exit_code()),
        None => (format!("💥 Unable to run command: {:#}", err), 1),
    }
}
