//! CLI commands module.

mod config;
mod melody;
mod util;

pub use config::ConfigCommand;
pub use melody::MelodyCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
