//! Configuration management for CLI tools.
//!
//! Configuration is stored in ~/.kroneum/{app_name}/config.yaml and holds
//! named contexts, one per device console the CLI can talk to.

use std::collections::HashMap;
use std::path::PathBuf;

use kroneum_melody::DEFAULT_SCALE_FACTOR;
use serde::{Deserialize, Serialize};

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".kroneum";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Console address used when a context does not set one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
/// Request timeout used when a context does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application name (not serialized).
    #[serde(skip)]
    pub app_name: String,

    /// Name of the currently active context.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_context: String,

    /// Map of context name to context configuration.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub contexts: HashMap<String, Context>,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

/// A single device context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// Context name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Device console base URL (optional, uses default if empty).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_url: String,

    /// Request timeout in seconds (optional).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timeout: u64,

    /// Multiplier applied to wire durations (optional).
    ///
    /// Couples local beat units to the device's native time unit. Zero
    /// means [`DEFAULT_SCALE_FACTOR`].
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub scale_factor: f64,

    /// Application-specific settings.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

fn is_zero_f64(n: &f64) -> bool {
    *n == 0.0
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(app_name))
    }

    /// Gets the default config file path.
    pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
        Self::default_config_dir(app_name).map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Adds a new context, replacing one with the same name.
    pub fn add_context(&mut self, name: &str, mut ctx: Context) -> anyhow::Result<()> {
        if ctx.scale_factor < 0.0 || !ctx.scale_factor.is_finite() {
            anyhow::bail!("scale factor must be positive, got {}", ctx.scale_factor);
        }
        ctx.name = name.to_string();
        self.contexts.insert(name.to_string(), ctx);
        self.save()
    }

    /// Deletes a context.
    pub fn delete_context(&mut self, name: &str) -> anyhow::Result<()> {
        if self.contexts.remove(name).is_none() {
            anyhow::bail!("context '{}' not found", name);
        }
        if self.current_context == name {
            self.current_context.clear();
        }
        self.save()
    }

    /// Sets the current context.
    pub fn use_context(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.contexts.contains_key(name) {
            anyhow::bail!("context '{}' not found", name);
        }
        self.current_context = name.to_string();
        self.save()
    }

    /// Gets a specific context.
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Gets the current context.
    pub fn get_current_context(&self) -> Option<&Context> {
        if self.current_context.is_empty() {
            return None;
        }
        self.contexts.get(&self.current_context)
    }

    /// Resolves the context by name, or current context if name is empty.
    pub fn resolve_context(&self, name: Option<&str>) -> Option<&Context> {
        match name {
            Some(n) if !n.is_empty() => self.get_context(n),
            _ => self.get_current_context(),
        }
    }

    /// Lists all context names, sorted.
    pub fn list_contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contexts.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Context {
    /// Base URL, falling back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        if self.base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            self.base_url.trim_end_matches('/')
        }
    }

    /// Timeout in seconds, falling back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout_secs(&self) -> u64 {
        if self.timeout == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout
        }
    }

    /// Wire scale factor, falling back to [`DEFAULT_SCALE_FACTOR`].
    pub fn scale_factor(&self) -> f64 {
        if self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            DEFAULT_SCALE_FACTOR
        }
    }
}

/// Loads configuration for the specified app, creating an empty file if none exists.
pub fn load_config(app_name: &str, custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path(app_name)
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cfg = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        serde_yaml::from_str(&content)?
    } else {
        let cfg = Config::default();
        std::fs::write(&config_path, serde_yaml::to_string(&cfg)?)?;
        cfg
    };

    cfg.app_name = app_name.to_string();
    cfg.config_path = config_path;

    Ok(cfg)
}
