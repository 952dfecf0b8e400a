// ABOUTME: Entry point for the sarono CLI application.
// ABOUTME: Parses arguments, builds configuration, and runs the cleanup.

mod cli;

use clap::Parser;
use cli::Cli;
use sarono::cleanup;
use sarono::config::Config;
use sarono::error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env(cli.duration.as_deref())?;
    cleanup::run(config).await
}
