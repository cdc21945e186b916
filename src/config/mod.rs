//! # Module: Editor Configuration
//!
//! ## Responsibility
//! Parse and validate the TOML editor configuration and external catalog
//! files. Users point the editor at a config with:
//! ```text
//! dashboard-editor --config editor.toml
//! ```
//!
//! ## Guarantees
//! - Deterministic: same TOML input always produces the same `EditorConfig`
//! - Validated: all semantic constraints are checked before a config is accepted
//! - Every section and field is optional and falls back to a documented default
//!
//! ## NOT Responsible For
//! - Applying log settings (that belongs to `init_tracing`)
//! - Running the terminal loop (that belongs to `tui`)

pub mod catalog;
pub mod loader;
pub mod validation;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use validation::ConfigError;

// ── Default value functions ──────────────────────────────────────────────

/// Default event poll timeout: 250ms.
fn default_tick_rate_ms() -> u64 {
    250
}

/// Default minimum terminal width.
fn default_min_cols() -> u16 {
    80
}

/// Default minimum terminal height.
fn default_min_rows() -> u16 {
    24
}

/// Default log filter when `RUST_LOG` is unset.
fn default_level() -> String {
    "info".to_string()
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration for the editor.
///
/// # Example
///
/// ```toml
/// [ui]
/// tick_rate_ms = 100
///
/// [catalog]
/// path = "catalog.toml"
///
/// [observability]
/// log_format = "json"
/// log_file = "editor.log"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EditorConfig {
    /// Terminal UI timing and size guards.
    #[serde(default)]
    pub ui: UiConfig,
    /// Where the seed catalog comes from.
    #[serde(default)]
    pub catalog: CatalogSource,
    /// Logging output.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Below this width the "too small" notice is shown.
    #[serde(default = "default_min_cols")]
    pub min_cols: u16,
    /// Below this height the "too small" notice is shown.
    #[serde(default = "default_min_rows")]
    pub min_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            min_cols: default_min_cols(),
            min_rows: default_min_rows(),
        }
    }
}

impl UiConfig {
    /// Poll timeout as a `Duration`.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Seed catalog location. `None` uses the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogSource {
    /// Path to a TOML catalog file.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_file: None,
            level: default_level(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable log output.
    #[default]
    Pretty,
    /// Structured JSON log output for machine consumption.
    Json,
}
