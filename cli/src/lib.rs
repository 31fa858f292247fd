//! CLI utilities for kroneum.
//!
//! This crate provides common utilities for CLI applications: context-based
//! configuration, melody input loading and output formatting.

pub mod config;
pub mod input;
pub mod output;

pub use config::{Config, Context, load_config};
pub use input::{InputError, load_input, resolve_melody};
pub use output::{Output, OutputFormat, print_info, print_success};
