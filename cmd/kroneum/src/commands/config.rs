//! Configuration management commands.

use clap::{Args, Subcommand};

use kroneum_cli::config::Context as CliContext;
use kroneum_cli::output::print_success;

use super::get_config;
use crate::Cli;

/// Manage CLI configuration.
///
/// Contexts allow you to manage multiple device consoles,
/// similar to kubectl's context management.
///
/// Configuration is stored in ~/.kroneum/kroneum/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Add a new context
    #[command(name = "add-context")]
    AddContext {
        /// Context name
        name: String,
        /// Device console base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Wire duration scale factor
        #[arg(long)]
        scale_factor: Option<f64>,
    },
    /// Delete a context
    #[command(name = "delete-context")]
    DeleteContext {
        /// Context name
        name: String,
    },
    /// Set the current context
    #[command(name = "use-context")]
    UseContext {
        /// Context name
        name: String,
    },
    /// Display the current context
    #[command(name = "get-context")]
    GetContext,
    /// List all contexts
    #[command(name = "list-contexts", alias = "get-contexts")]
    ListContexts,
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::AddContext {
                name,
                base_url,
                timeout,
                scale_factor,
            } => {
                let mut cfg = get_config(cli)?;

                let ctx = CliContext {
                    base_url: base_url.clone().unwrap_or_default(),
                    timeout: timeout.unwrap_or(0),
                    scale_factor: scale_factor.unwrap_or(0.0),
                    ..Default::default()
                };

                cfg.add_context(name, ctx)?;
                print_success(&format!("Context \"{}\" added successfully", name));
                Ok(())
            }

            ConfigSubcommand::DeleteContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.delete_context(name)?;
                print_success(&format!("Context \"{}\" deleted", name));
                Ok(())
            }

            ConfigSubcommand::UseContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.use_context(name)?;
                print_success(&format!("Switched to context \"{}\"", name));
                Ok(())
            }

            ConfigSubcommand::GetContext => {
                let cfg = get_config(cli)?;
                if cfg.current_context.is_empty() {
                    println!("No current context set");
                } else {
                    println!("{}", cfg.current_context);
                }
                Ok(())
            }

            ConfigSubcommand::ListContexts => {
                let cfg = get_config(cli)?;

                if cfg.contexts.is_empty() {
                    println!("No contexts configured");
                    return Ok(());
                }

                println!("{:<8} {:<20} {:<30} {}", "CURRENT", "NAME", "BASE_URL", "SCALE");

                for (name, ctx) in cfg
                    .list_contexts()
                    .into_iter()
                    .filter_map(|name| cfg.get_context(name).map(|ctx| (name, ctx)))
                {
                    let current = if name == cfg.current_context { "*" } else { "" };
                    println!(
                        "{:<8} {:<20} {:<30} {}",
                        current,
                        name,
                        ctx.base_url(),
                        ctx.scale_factor()
                    );
                }

                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;

                println!("Config file: {}", cfg.path().display());
                println!("Current context: {}", cfg.current_context);
                println!("Contexts: {}", cfg.contexts.len());

                for name in cfg.list_contexts() {
                    let Some(ctx) = cfg.get_context(name) else {
                        continue;
                    };
                    println!("\n  {}:", name);
                    println!("    Base URL: {}", ctx.base_url());
                    println!("    Timeout: {}s", ctx.timeout_secs());
                    println!("    Scale factor: {}", ctx.scale_factor());
                }

                Ok(())
            }
        }
    }
}
