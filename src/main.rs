use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use prme::{
    catalog::FileCatalog,
    cli::{tui, Cli, LogLevel},
    io::CatalogLocator,
    materialize::{GitMaterializer, Materializer},
    wizard::Wizard,
    Result,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with CLI flags.
///
/// The wizard owns the terminal while it runs, so logs go to `--log-file`
/// when one is given; otherwise they go to stderr.
fn initialize_tracing(log_level: LogLevel, log_file: Option<&std::path::Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env("PRME_LOG")
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let catalog_path = CatalogLocator::from_env(cli.catalog, working_dir.clone()).locate()?;
    info!("Using template catalog {}", catalog_path.display());

    let wizard = Wizard::new(FileCatalog::new(catalog_path), working_dir)?;

    match tui::run_wizard(wizard).await? {
        tui::Outcome::Cancelled => {
            debug!("Wizard cancelled");
        }
        tui::Outcome::Materialize(request) => {
            GitMaterializer::new().materialize(&request.source_location, &request.destination)?;
            println!("✓ Project created at {}", request.destination.display());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = initialize_tracing(cli.log_level, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
