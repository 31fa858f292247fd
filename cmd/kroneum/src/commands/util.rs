//! Utility functions for CLI commands.

use kroneum_cli::config::{Config, Context, load_config};
use kroneum_cli::output::{Output, OutputFormat};
use kroneum_melody::DEFAULT_SCALE_FACTOR;

use crate::Cli;

const APP_NAME: &str = "kroneum";

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Gets the context configuration to use.
pub fn get_context(cli: &Cli) -> anyhow::Result<Context> {
    let cfg = get_config(cli)?;

    match cfg.resolve_context(cli.context.as_deref()) {
        Some(ctx) => Ok(ctx.clone()),
        None => match cli.context.as_deref() {
            Some(name) => anyhow::bail!("context '{}' not found", name),
            None => anyhow::bail!(
                "no context specified. Use -c flag or set a default context with 'kroneum config use-context'"
            ),
        },
    }
}

/// Gets the context if one is selected, without failing when none is.
pub fn find_context(cli: &Cli) -> anyhow::Result<Option<Context>> {
    if cli.context.is_some() {
        return get_context(cli).map(Some);
    }
    Ok(get_config(cli)?.get_current_context().cloned())
}

/// Picks the wire scale factor: flag, then context, then default.
pub fn resolve_scale(flag: Option<f64>, ctx: Option<&Context>) -> f64 {
    flag.or_else(|| ctx.map(Context::scale_factor))
        .unwrap_or(DEFAULT_SCALE_FACTOR)
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: serde::Serialize>(cli: &Cli, result: &T) -> anyhow::Result<()> {
    Output::new(OutputFormat::from_flag(cli.json), cli.output.clone()).write(result)
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_scale_precedence() {
        let ctx = Context {
            scale_factor: 400.0,
            ..Default::default()
        };
        assert_eq!(resolve_scale(Some(2.0), Some(&ctx)), 2.0);
        assert_eq!(resolve_scale(None, Some(&ctx)), 400.0);
        assert_eq!(resolve_scale(None, Some(&Context::default())), DEFAULT_SCALE_FACTOR);
        assert_eq!(resolve_scale(None, None), DEFAULT_SCALE_FACTOR);
    }
}
