//! # Binary: Dashboard Editor
//!
//! ## Responsibility
//! Entry point for the terminal dashboard editor. Loads configuration and the
//! widget catalog, initializes the terminal, runs the event loop, and ensures
//! clean exit.
//!
//! ## Usage
//! ```bash
//! dashboard-editor                              # built-in catalog
//! dashboard-editor --config editor.toml
//! dashboard-editor --catalog my-catalog.toml    # overrides [catalog] path
//! ```
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C
//! - Configuration errors are reported before the terminal is touched

use std::io;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use dashboard_editor::config::catalog::load_catalog_from_file;
use dashboard_editor::config::loader::load_from_file;
use dashboard_editor::tui::app::App;
use dashboard_editor::tui::events::{apply_event, poll_event};
use dashboard_editor::tui::ui;
use dashboard_editor::{
    init_tracing, initial_dashboard, DashboardError, DashboardState, DashboardStore, EditorConfig,
};

/// CLI arguments for the editor binary.
#[derive(Debug, Default)]
struct CliArgs {
    /// Path to the editor configuration file.
    config: Option<PathBuf>,
    /// Catalog file that overrides the configured one.
    catalog: Option<PathBuf>,
}

/// Parses command-line arguments.
///
/// # Returns
/// Parsed `CliArgs`; unknown arguments are ignored.
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if let Some(path) = args.get(i) {
                    cli.config = Some(PathBuf::from(path));
                }
            }
            "--catalog" => {
                i += 1;
                if let Some(path) = args.get(i) {
                    cli.catalog = Some(PathBuf::from(path));
                }
            }
            _ => {} // Ignore unknown args
        }
        i += 1;
    }

    cli
}

/// Loads the config file, or defaults when none was given.
fn load_config(cli: &CliArgs) -> Result<EditorConfig, DashboardError> {
    match &cli.config {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(EditorConfig::default()),
    }
}

/// Loads the catalog named on the command line or in the config, falling
/// back to the built-in seed.
fn load_dashboard(cli: &CliArgs, config: &EditorConfig) -> Result<DashboardState, DashboardError> {
    match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => {
            let state = load_catalog_from_file(path)?;
            info!(path = %path.display(), widgets = state.total_widgets(), "catalog loaded");
            Ok(state)
        }
        None => Ok(initial_dashboard()),
    }
}

/// Sets up the terminal for TUI rendering.
///
/// # Errors
/// Returns `io::Error` if terminal initialization fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to its original state.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the editor event loop until the app asks to quit.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), DashboardError> {
    let tick_rate = app.ui.tick_rate();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(tick_rate);
        apply_event(app, event);

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn start() -> Result<(), DashboardError> {
    let cli = parse_args();
    let config = load_config(&cli)?;
    init_tracing(&config.observability)?;
    let state = load_dashboard(&cli, &config)?;

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(DashboardStore::new(state), config.ui);
    info!(
        categories = app.state().categories.len(),
        widgets = app.state().total_widgets(),
        "editor started"
    );

    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    info!(revision = app.store().revision(), "editor exited");
    result
}

fn main() {
    if let Err(e) = start() {
        eprintln!("dashboard-editor: {e}");
        std::process::exit(1);
    }
}
