//! inkpost CLI - automated blog publishing.
//!
//! Provides commands for:
//! - `publish`: Generate, render, and publish the next scheduled post
//! - `check`: Validate configuration, local files, and API credentials
//! - `render`: Render a Markdown file to styled HTML

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, PublishArgs, RenderArgs};
use output::Output;

/// inkpost - automated blog publishing.
#[derive(Parser)]
#[command(name = "inkpost", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, render, and publish the next scheduled post.
    Publish(PublishArgs),
    /// Validate configuration, local files, and API credentials.
    Check(CheckArgs),
    /// Render a Markdown file to styled HTML.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Publish(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
