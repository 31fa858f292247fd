//! Melody input loading.
//!
//! Melody files hold an array of `[pitch, beats]` pairs in YAML or JSON:
//!
//! ```yaml
//! - [A5, 0.25]
//! - [rest, 0.5]
//! - [C#6, 1]
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use kroneum_melody::{Melody, Preset};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for input loading.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read file: {0}")]
    ReadFile(#[from] io::Error),
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse input (tried YAML and JSON)")]
    ParseFailed,
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("invalid preset '{id}': {source}")]
    InvalidPreset {
        id: String,
        source: kroneum_melody::Error,
    },
    #[error("no melody given, pass a preset id or -f <file>")]
    Missing,
}

/// Loads a value from a YAML or JSON file. `-` reads stdin.
pub fn load_input<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, InputError> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return load_input_from_stdin();
    }
    let data = fs::read(path)?;
    parse_input(&data, path)
}

/// Parses input data based on file extension or content.
pub fn parse_input<T: DeserializeOwned>(data: &[u8], path: impl AsRef<Path>) -> Result<T, InputError> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(data)?),
        Some("json") => Ok(serde_json::from_slice(data)?),
        _ => {
            // Try YAML first, then JSON
            if let Ok(v) = serde_yaml::from_slice(data) {
                return Ok(v);
            }
            if let Ok(v) = serde_json::from_slice(data) {
                return Ok(v);
            }
            Err(InputError::ParseFailed)
        }
    }
}

/// Loads a value from stdin.
pub fn load_input_from_stdin<T: DeserializeOwned>() -> Result<T, InputError> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;

    // Try JSON first for stdin, then YAML
    if let Ok(v) = serde_json::from_slice(&data) {
        return Ok(v);
    }
    if let Ok(v) = serde_yaml::from_slice(&data) {
        return Ok(v);
    }
    Err(InputError::ParseFailed)
}

/// Resolves a melody from a preset id or an input file.
///
/// A file wins over a preset when both are given.
pub fn resolve_melody(preset: Option<&str>, file: Option<&str>) -> Result<Melody, InputError> {
    if let Some(path) = file {
        return load_input(path);
    }

    let id = preset.ok_or(InputError::Missing)?;
    let preset = Preset::by_id(id).ok_or_else(|| InputError::UnknownPreset(id.to_string()))?;
    preset.melody().map_err(|source| InputError::InvalidPreset {
        id: id.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kroneum_melody::notes::*;
    use kroneum_melody::n;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_yaml_melody() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "- [A5, 0.25]\n- [rest, 0.5]\n- [C#6, 1]").unwrap();

        let melody: Melody = load_input(file.path()).unwrap();
        assert_eq!(melody.events(), &[n(A5, SIXTEENTH), n(REST, EIGHTH), n(CS6, QUARTER)]);
    }

    #[test]
    fn test_load_json_melody_with_codes() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, "[[165, 0.25], [0, 0.25]]").unwrap();

        let melody: Melody = load_input(file.path()).unwrap();
        assert_eq!(melody.events(), &[n(A5, SIXTEENTH), n(REST, SIXTEENTH)]);
    }

    #[test]
    fn test_invalid_melody_is_rejected() {
        let result: Result<Melody, _> = parse_input(b"[[\"A5\", 0]]", "melody.json");
        assert!(matches!(result, Err(InputError::ParseJson(_))));

        let result: Result<Melody, _> = parse_input(b"not a melody {{{{", "melody.txt");
        assert!(matches!(result, Err(InputError::ParseFailed)));
    }

    #[test]
    fn test_resolve_preset() {
        let melody = resolve_melody(Some("beep"), None).unwrap();
        assert_eq!(melody.events(), &[n(G5, SIXTEENTH)]);

        assert!(matches!(
            resolve_melody(Some("nope"), None),
            Err(InputError::UnknownPreset(_))
        ));
        assert!(matches!(resolve_melody(None, None), Err(InputError::Missing)));
    }
}
