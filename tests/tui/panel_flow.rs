//! Integration tests for the add-widget panel: authoring a widget from the
//! form and copying existing widgets, all through key events.

use dashboard_editor::config::UiConfig;
use dashboard_editor::tui::app::{App, PanelField};
use dashboard_editor::tui::events::{apply_event, InputEvent};
use dashboard_editor::{initial_dashboard, DashboardStore, DEFAULT_WIDGET_TEXT};

fn app() -> App {
    App::new(DashboardStore::new(initial_dashboard()), UiConfig::default())
}

fn press(app: &mut App, events: &[InputEvent]) {
    for &e in events {
        apply_event(app, e);
    }
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        apply_event(app, InputEvent::Char(c));
    }
}

fn open_panel_on_cwpp(app: &mut App) {
    press(app, &[InputEvent::Down, InputEvent::Char('a')]);
    assert_eq!(app.panel.as_ref().map(|p| p.target()), Some("cwpp-dashboard"));
    assert_eq!(app.panel_field, PanelField::Name);
}

fn names_in(app: &App, category_id: &str) -> Vec<String> {
    app.state()
        .category(category_id)
        .map(|c| c.widgets.iter().map(|w| w.name.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_author_widget_with_text() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    type_str(&mut app, "Uptime");
    apply_event(&mut app, InputEvent::Tab);
    type_str(&mut app, "99.9% this week");
    apply_event(&mut app, InputEvent::Enter);

    let widget = app
        .state()
        .category("cwpp-dashboard")
        .and_then(|c| c.widgets.last().cloned())
        .expect("test: widget added");
    assert_eq!(widget.name, "Uptime");
    assert_eq!(widget.text, "99.9% this week");
    assert!(widget.chart_data.is_none());
    assert!(widget.id.starts_with("widget-"));

    // Form resets, panel stays open for more additions.
    let panel = app.panel.as_ref().expect("test: panel open");
    assert!(panel.name_input.is_empty());
    assert!(panel.text_input.is_empty());
    assert_eq!(app.status.as_deref(), Some("Added \"Uptime\""));
}

#[test]
fn test_author_widget_default_text() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    type_str(&mut app, "Uptime");
    apply_event(&mut app, InputEvent::Enter);
    let text = app
        .state()
        .category("cwpp-dashboard")
        .and_then(|c| c.widgets.last())
        .map(|w| w.text.clone());
    assert_eq!(text.as_deref(), Some(DEFAULT_WIDGET_TEXT));
}

#[test]
fn test_author_blank_name_is_noop() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    type_str(&mut app, "   ");
    apply_event(&mut app, InputEvent::Enter);
    assert_eq!(app.state().total_widgets(), 6);
    assert_eq!(app.store().revision(), 0);
    assert_eq!(
        app.panel.as_ref().map(|p| p.name_input.as_str()),
        Some("   ")
    );
}

#[test]
fn test_backspace_edits_name() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    type_str(&mut app, "Uptimex");
    apply_event(&mut app, InputEvent::Backspace);
    assert_eq!(
        app.panel.as_ref().map(|p| p.name_input.as_str()),
        Some("Uptime")
    );
}

#[test]
fn test_copy_existing_widget_by_search() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    press(&mut app, &[InputEvent::Tab, InputEvent::Tab]);
    assert_eq!(app.panel_field, PanelField::Search);
    type_str(&mut app, "risk a");
    assert_eq!(app.panel_visible_len(), 2);

    // Second match is the registry image risk widget.
    press(
        &mut app,
        &[
            InputEvent::Enter,
            InputEvent::Down,
            InputEvent::Char(' '),
            InputEvent::Enter,
        ],
    );

    assert!(app.panel.is_none());
    assert_eq!(app.status.as_deref(), Some("Added 1 widget"));
    assert_eq!(
        names_in(&app, "cwpp-dashboard"),
        [
            "Top 5 Namespace Specific Alerts",
            "Workload Alerts",
            "Image Risk Assessment"
        ]
    );
    assert_eq!(names_in(&app, "registry-scan").len(), 2);
}

#[test]
fn test_copy_several_and_skip_own_widgets() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    press(&mut app, &[InputEvent::BackTab]);
    assert_eq!(app.panel_field, PanelField::List);

    // Select all six rows; two already live in the target.
    for _ in 0..6 {
        press(&mut app, &[InputEvent::Char(' '), InputEvent::Down]);
    }
    assert_eq!(app.panel.as_ref().map(|p| p.selection_len()), Some(6));
    apply_event(&mut app, InputEvent::Enter);

    assert_eq!(app.status.as_deref(), Some("Added 4 widgets"));
    assert_eq!(names_in(&app, "cwpp-dashboard").len(), 6);
    assert_eq!(app.state().total_widgets(), 10);
}

#[test]
fn test_confirm_with_nothing_selected_keeps_panel() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    press(&mut app, &[InputEvent::BackTab, InputEvent::Enter]);
    assert!(app.panel.is_some());
    assert_eq!(app.state().total_widgets(), 6);
}

#[test]
fn test_escape_discards_panel_state() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    type_str(&mut app, "draft");
    apply_event(&mut app, InputEvent::Escape);
    assert!(app.panel.is_none());
    assert!(!app.should_quit);

    apply_event(&mut app, InputEvent::Char('a'));
    assert_eq!(
        app.panel.as_ref().map(|p| p.name_input.as_str()),
        Some("")
    );
}

#[test]
fn test_author_then_copy() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    type_str(&mut app, "Uptime");
    apply_event(&mut app, InputEvent::Enter);

    press(&mut app, &[InputEvent::Tab, InputEvent::Tab]);
    type_str(&mut app, "cloud accounts");
    press(
        &mut app,
        &[InputEvent::Down, InputEvent::Char(' '), InputEvent::Enter],
    );

    assert!(app.panel.is_none());
    assert_eq!(
        names_in(&app, "cwpp-dashboard"),
        [
            "Top 5 Namespace Specific Alerts",
            "Workload Alerts",
            "Uptime",
            "Cloud Accounts"
        ]
    );
    assert_eq!(app.store().revision(), 2);
}

#[test]
fn test_list_up_at_top_returns_to_search() {
    let mut app = app();
    open_panel_on_cwpp(&mut app);
    press(&mut app, &[InputEvent::BackTab, InputEvent::Down, InputEvent::Up]);
    assert_eq!(app.panel_field, PanelField::List);
    assert_eq!(app.panel_cursor, 0);
    apply_event(&mut app, InputEvent::Up);
    assert_eq!(app.panel_field, PanelField::Search);
}
