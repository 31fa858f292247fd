//! Kroneum CLI - A command line interface for the Kroneum device console.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod device;

use commands::{ConfigCommand, MelodyCommand};

/// Kroneum CLI - A command line interface for the Kroneum device console.
///
/// This tool works with buzzer melodies:
///   - Inspect built-in presets
///   - Schedule a melody on a local timeline
///   - Encode a melody for the device
///   - Render a square-wave preview
///   - Play a melody on the device
///
/// Configuration is stored in ~/.kroneum/kroneum/ and supports multiple contexts,
/// similar to kubectl's context management.
#[derive(Parser)]
#[command(name = "kroneum")]
#[command(about = "Kroneum device console CLI tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.kroneum/kroneum/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Context name to use
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Input melody file (YAML or JSON, `-` for stdin)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Schedule, encode, render and play melodies
    Melody(MelodyCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli),
        Commands::Melody(cmd) => cmd.run(&cli).await,
    }
}
