//! Configuration types for wsp.
//!
//! [`Config::load`] reads `~/.config/wsp/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::timestamp::{DateOrder, MeridiemRule, TimestampResolver};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parser]
on_error   = "abort"
meridiem   = "substring"
date_order = "month_first"

[stats]
top_terms      = 50
min_term_chars = 2
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/wsp/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

/// What to do with a message that cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first bad message and report it.
    #[default]
    Abort,
    /// Record a diagnostic, keep going, report all skips at the end.
    Skip,
}

/// `[parser]` section of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
    #[serde(default)]
    pub meridiem: MeridiemRule,
    #[serde(default)]
    pub date_order: DateOrder,
}

impl ParserConfig {
    pub fn resolver(&self) -> TimestampResolver {
        TimestampResolver::new(self.meridiem, self.date_order)
    }
}

/// `[stats]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,
    #[serde(default = "default_min_term_chars")]
    pub min_term_chars: usize,
}

fn default_top_terms() -> usize { 50 }
fn default_min_term_chars() -> usize { 2 }

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_terms: default_top_terms(),
            min_term_chars: default_min_term_chars(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/wsp/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_layers(&[path.as_path()])
    }

    /// Defaults, then the user file, then `extra` on top. `extra` must exist.
    pub fn load_with(extra: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false))
            .add_source(config::File::from(extra).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Defaults overlaid with each optional file in `paths`, in order.
    pub fn load_layers(paths: &[&Path]) -> anyhow::Result<Self> {
        let mut cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        for path in paths {
            cfg = cfg.add_source(config::File::from(*path).required(false));
        }
        cfg.build()?.try_deserialize().map_err(Into::into)
    }

    /// Defaults overlaid with an in-memory TOML document.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
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
        .join("wsp")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
