//! ratc configuration system
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. RATC_CONFIG environment variable (path to a TOML file)
//! 3. Project-level (./ratc.toml)
//! 4. User-level (~/.config/ratc/config.toml)
//! 5. Default values
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use ratc::util::config::load_config;
//!
//! let config = load_config(None).unwrap();
//! println!("{}", config.log.level);
//! ```

use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "RATC_CONFIG";

/// Project-level config file name
pub const PROJECT_CONFIG: &str = "ratc.toml";

/// Top-level configuration for ratc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RatConfig {
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
    /// Diagnostic rendering settings
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    /// Token/AST dump settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    /// Minimum level printed to stderr
    #[serde(default)]
    pub level: LogLevel,
}

/// Diagnostic configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Colorize headers and carets
    #[serde(default = "default_true")]
    pub colors: bool,
    /// Print the offending source line under the message
    #[serde(default = "default_true")]
    pub show_source: bool,
    /// Caret character
    #[serde(default = "default_indicator")]
    pub indicator: char,
}

fn default_true() -> bool {
    true
}

fn default_indicator() -> char {
    '^'
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            colors: true,
            show_source: true,
            indicator: '^',
        }
    }
}

/// Output format for `tokens` / `parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Pretty,
    /// JSON, one document per run
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("ratc"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("ratc"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("ratc"));
    }

    None
}

/// Get the user config file path (~/.config/ratc/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Parse a config from TOML text
pub fn parse_config(content: &str) -> Result<RatConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Load a config file from an explicit path
pub fn load_config_file(path: &Path) -> Result<RatConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Resolve and load configuration.
///
/// `explicit` is the `--config` CLI flag. Without it the environment variable,
/// the project file and the user file are tried in that order; the first one
/// found wins. Nothing found means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<RatConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_config_file(Path::new(&path));
    }

    let project = Path::new(PROJECT_CONFIG);
    if project.exists() {
        tracing::debug!("Using project config {}", project.display());
        return load_config_file(project);
    }

    match get_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Using user config {}", path.display());
            load_config_file(&path)
        }
        _ => Ok(RatConfig::default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[source] toml::de::Error),
}
