use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use issue_import::cli::Cli;
use issue_import::cli::handlers::{CommandContext, handle_dry_run, handle_import};
use issue_import::config::{ImportConfig, Overrides};
use issue_import::csv_source::read_rows;
use issue_import::error::ImportError;
use issue_import::logging;

/// Exit status for bad arguments or unreadable input.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose, cli.trace_file.as_deref()) {
        eprintln!("{} {}", "error:".red(), e);
        return ExitCode::from(EXIT_USAGE);
    }

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red(), e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir()?;
    let config = ImportConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?
        .apply(Overrides {
            bin: cli.gh,
            repo: cli.repo,
            log_path: cli.log_path,
        });

    let rows = read_rows(&cli.csv)?;
    tracing::info!(path = %cli.csv.display(), rows = rows.len(), "Loaded CSV");

    if cli.dry_run {
        return handle_dry_run(&rows, cli.verbose);
    }

    let ctx = CommandContext::new(config);
    handle_import(&ctx, &rows)
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ImportError>() {
        Some(e) if e.is_usage() => EXIT_USAGE,
        _ => 1,
    }
}
