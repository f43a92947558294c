//! `projects` command-line entry point.
//!
//! # Responsibility
//! - Configure logging and the selected backend from flags/env.
//! - Run one action, or an interactive prompt session.
//!
//! # Invariants
//! - Failed actions print to stderr and exit non-zero.

mod backend;
mod cli;
mod session;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use projects_core::{init_logging, init_stderr_logging, Controller, ProjectService};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    start_logging(&cli)?;

    match cli.command {
        Command::Reset => {
            let store = backend::require_mock_store(&cli.backend)?;
            store.clear()?;
            println!(
                "Mock collection `{}` cleared in `{}`",
                store.config().storage_key,
                cli.backend.store.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Interactive => {
            let controller = Controller::new(ProjectService::new(backend::build_backend(
                &cli.backend,
            )?));
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run_session(&controller, stdin.lock(), &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let Some(request) = command.into_request() else {
                return Ok(ExitCode::SUCCESS);
            };
            let action = request.action();
            let controller = Controller::new(ProjectService::new(backend::build_backend(
                &cli.backend,
            )?));
            let outcome = controller.run(request).await;
            info!(
                "event=cli_action module=cli status={} action={}",
                if outcome.is_error() { "error" } else { "ok" },
                action
            );
            if outcome.is_error() {
                eprintln!("{}", outcome.render());
                Ok(ExitCode::FAILURE)
            } else {
                println!("{}", outcome.render());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn start_logging(cli: &Cli) -> Result<()> {
    match &cli.log_dir {
        Some(dir) => {
            let dir = dir
                .to_str()
                .ok_or_else(|| anyhow!("log dir `{}` is not valid UTF-8", dir.display()))?;
            init_logging(&cli.log_level, dir).map_err(|err| anyhow!(err))
        }
        None => init_stderr_logging(&cli.log_level).map_err(|err| anyhow!(err)),
    }
}
