//! Namespace join CLI
//!
//! A thin operational front-end over the `nsjoin` library: open a namespace
//! descriptor, join it, run a command inside.

use clap::Parser;
use std::process;
use tracing::Level;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the command
    if let Err(e) = commands::dispatch(cli.command) {
        eprintln!("❌ Error: {e:#}");
        process::exit(1);
    }
}
