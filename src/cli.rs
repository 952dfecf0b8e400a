// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Flags override the environment-based configuration.

use clap::Parser;

#[derive(Parser)]
#[command(name = "sarono")]
#[command(about = "Scheduled container image cleanup with Telegram reporting")]
#[command(version)]
pub struct Cli {
    /// Prune unused images older than this span (e.g. "72h"); "0h" prunes
    /// all unused images. Overrides the DURATION environment variable.
    #[arg(short, long, value_name = "SPAN")]
    pub duration: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
