//! kickstart CLI - Python data and AI project scaffolding
//!
//! This is the main entry point for the kickstart command-line interface.

mod cli;
mod commands;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Scoped to this invocation; the current-thread runtime keeps every
    // task on this thread so the default subscriber applies throughout
    let _tracing = tracing::subscriber::set_default(build_subscriber(cli.verbose, cli.quiet));

    let config = cli.config.as_deref();
    let result = match cli.command {
        Some(Commands::New(args)) => commands::new::run(args, config).await,
        Some(Commands::Types(args)) => commands::types::run(args, config),
        None => commands::new::run(Default::default(), config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Build the tracing subscriber for the requested verbosity
fn build_subscriber(verbose: u8, quiet: bool) -> impl tracing::Subscriber + Send + Sync {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so `--json` output stays machine-readable
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
}
