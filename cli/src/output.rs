//! Output utilities for CLI tools.

use std::{fs::File, io::Write};

use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML format (default).
    #[default]
    Yaml,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Picks JSON when `json` is set, YAML otherwise.
    pub fn from_flag(json: bool) -> Self {
        if json { OutputFormat::Json } else { OutputFormat::Yaml }
    }
}

/// Output configuration.
pub struct Output {
    pub format: OutputFormat,
    pub file: Option<String>,
}

impl Output {
    /// Creates a new output configuration.
    pub fn new(format: OutputFormat, file: Option<String>) -> Self {
        Self { format, file }
    }

    /// Renders a value in the configured format.
    pub fn render<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
        })
    }

    /// Outputs the result.
    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let output = self.render(value)?;

        match &self.file {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(output.as_bytes())?;
            }
            None => {
                println!("{}", output.trim_end());
            }
        }

        Ok(())
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Prints info message.
pub fn print_info(msg: &str) {
    eprintln!("\x1b[34mℹ\x1b[0m {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kroneum_melody::WireNote;

    #[test]
    fn test_render_formats() {
        let wire = vec![WireNote::new(0xa5, 100.0), WireNote::new(0x00, 200.0)];

        let json = Output::new(OutputFormat::Json, None).render(&wire).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([[165, 100], [0, 200]]));

        let yaml = Output::new(OutputFormat::Yaml, None).render(&wire).unwrap();
        assert!(yaml.contains("165"));
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(OutputFormat::from_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag(false), OutputFormat::Yaml);
    }
}
