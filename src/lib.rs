//! # dashboard-editor
//!
//! A terminal editor for dashboards made of categorized metric widgets.
//!
//! ## Architecture
//!
//! ```text
//! catalog (seed) → DashboardStore ──► tui::ui::draw
//!                        ▲                  │
//!                        └── panel / events ◄┘ (key intents)
//! ```
//!
//! Every mutation replaces the [`catalog::DashboardState`] value; older values
//! stay valid and share untouched categories with the new one.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use std::fs::OpenOptions;

use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub mod catalog;
pub mod config;
pub mod filter;
pub mod panel;
pub mod state;
pub mod tui;

// Re-exports for convenience
pub use catalog::{initial_dashboard, Category, ChartData, DashboardState, Widget};
pub use config::{ConfigError, EditorConfig, LogFormat, ObservabilityConfig};
pub use filter::filter_widgets;
pub use panel::AddWidgetPanel;
pub use state::{add_widget, remove_widget, DashboardStore, WidgetDraft, DEFAULT_WIDGET_TEXT};

/// Initialise the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.level`. Output goes to `config.log_file` (appended, no ANSI) or to
/// stderr, since stdout belongs to the terminal UI.
///
/// # Errors
///
/// - [`DashboardError::Io`] if the log file cannot be opened.
/// - [`DashboardError::Other`] if the filter directive is invalid or a global
///   subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// # use dashboard_editor::{init_tracing, DashboardError, ObservabilityConfig};
/// # fn example() -> Result<(), DashboardError> {
/// init_tracing(&ObservabilityConfig::default())?;
/// # Ok(()) }
/// ```
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), DashboardError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| DashboardError::Other(format!("bad log level '{}': {e}", config.level)))?,
    };

    let (writer, ansi) = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(std::sync::Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let result = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_current_span(true)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .try_init(),
    };

    result.map_err(|e| DashboardError::Other(format!("tracing init failed: {e}")))
}

/// Top-level editor errors.
///
/// Core state operations never fail; these cover the edges: configuration,
/// catalog files, and the terminal.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration or catalog file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal or log file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}
