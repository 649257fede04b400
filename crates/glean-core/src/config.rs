//! Configuration types for glean.
//!
//! [`Config::load`] reads `~/.config/glean/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests). CLI flags always take precedence over config values.

use crate::sink::SinkFormat;
use crate::types::{ExtractMode, Schema};
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[extraction]
mode   = "lines"
schema = "qa"

[output]
format       = "jsonl"
default_path = "data/records.jsonl"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/glean/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[extraction]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_mode")]
    pub mode: ExtractMode,
    #[serde(default = "default_schema")]
    pub schema: Schema,
}

fn default_mode() -> ExtractMode { ExtractMode::Lines }
fn default_schema() -> Schema { Schema::Qa }

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            schema: default_schema(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: SinkFormat,
    #[serde(default = "default_output_path")]
    pub default_path: PathBuf,
}

fn default_format() -> SinkFormat { SinkFormat::Jsonl }
fn default_output_path() -> PathBuf { PathBuf::from("data/records.jsonl") }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            default_path: default_output_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/glean/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("glean")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
