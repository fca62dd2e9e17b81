//! Configuration for rawsh.
//!
//! This module provides TOML configuration file loading from
//! `~/.rawsh/config.toml`. Every key is optional:
//!
//! ```toml
//! # Message shown when the session starts (inside raw mode)
//! banner = "raw echo shell, q quits"
//!
//! # Message shown after the terminal is restored
//! farewell = "Bye."
//!
//! [log]
//! enabled = true
//! level = "debug"
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Default banner, shown at session start.
pub const DEFAULT_BANNER: &str = "rawsh: raw-mode echo shell (press q to quit)";

/// Default farewell, shown after the terminal is restored.
pub const DEFAULT_FAREWELL: &str = "Exiting.";

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Banner text
    pub banner: String,
    /// Farewell text
    pub farewell: String,
    /// Log settings
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            farewell: DEFAULT_FAREWELL.to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<(), String> {
        if let Some(path) = Self::get_config_path() {
            let content = toml::to_string_pretty(self)
                .map_err(|e| format!("Failed to serialize config: {}", e))?;
            fs::write(&path, content).map_err(|e| format!("Failed to write config: {}", e))?;
            Ok(())
        } else {
            Err("Could not determine config path".to_string())
        }
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        if let Some(home) = home_dir() {
            let rawsh_dir = home.join(".rawsh");
            if !rawsh_dir.exists() {
                let _ = fs::create_dir_all(&rawsh_dir);
            }
            return Some(rawsh_dir.join("config.toml"));
        }
        None
    }

    /// Parsed log level, INFO on anything unrecognized
    pub fn log_level(&self) -> Level {
        match self.log.level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        }
    }
}

/// Get home directory
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
