//! Integration tests for App state transitions driven by key events.

use dashboard_editor::config::UiConfig;
use dashboard_editor::tui::app::{App, Mode};
use dashboard_editor::tui::events::{apply_event, InputEvent};
use dashboard_editor::{initial_dashboard, DashboardStore};

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

fn widget_count(app: &App, category_id: &str) -> usize {
    app.state()
        .category(category_id)
        .map_or(0, |c| c.widgets.len())
}

#[test]
fn test_delete_key_removes_focused_card() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Char('d'));
    assert_eq!(widget_count(&app, "cspm-executive"), 1);
    assert_eq!(app.state().total_widgets(), 5);
    assert_eq!(app.status.as_deref(), Some("Removed \"Cloud Accounts\""));
    assert_eq!(app.store().revision(), 1);
}

#[test]
fn test_delete_on_add_tile_does_nothing() {
    let mut app = app();
    press(&mut app, &[InputEvent::Left, InputEvent::Delete]);
    assert!(app.focus_on_add_tile());
    assert_eq!(app.state().total_widgets(), 6);
    assert_eq!(app.store().revision(), 0);
}

#[test]
fn test_removing_every_card_leaves_empty_category() {
    let mut app = app();
    press(&mut app, &[InputEvent::Char('d'), InputEvent::Char('d')]);
    assert_eq!(widget_count(&app, "cspm-executive"), 0);
    assert!(app.state().category("cspm-executive").is_some());
    assert!(app.focus_on_add_tile());
}

#[test]
fn test_search_mode_filters_dashboard() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Char('/'));
    assert_eq!(app.mode, Mode::Search);
    type_str(&mut app, "IMAGE");
    let visible: Vec<usize> = app
        .visible_categories()
        .iter()
        .map(|c| c.widgets.len())
        .collect();
    assert_eq!(visible, [0, 0, 2]);

    // q is text while searching
    apply_event(&mut app, InputEvent::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.search_query, "IMAGEq");

    press(&mut app, &[InputEvent::Backspace, InputEvent::Enter]);
    assert_eq!(app.mode, Mode::Browse);
    assert_eq!(app.search_query, "IMAGE");
}

#[test]
fn test_escape_clears_search_before_quitting() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Char('/'));
    type_str(&mut app, "risk");
    apply_event(&mut app, InputEvent::Enter);

    apply_event(&mut app, InputEvent::Escape);
    assert!(!app.should_quit);
    assert!(app.search_query.is_empty());

    apply_event(&mut app, InputEvent::Escape);
    assert!(app.should_quit);
}

#[test]
fn test_delete_under_filter_removes_visible_card() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Char('/'));
    type_str(&mut app, "security");
    press(
        &mut app,
        &[InputEvent::Enter, InputEvent::Down, InputEvent::Down],
    );
    assert_eq!(
        app.focused_widget().map(|(_, w)| w.id.clone()).as_deref(),
        Some("image-security")
    );
    apply_event(&mut app, InputEvent::Char('d'));
    assert!(app.state().find_widget("image-security").is_none());
    assert!(app.state().find_widget("image-risk").is_some());
}

#[test]
fn test_navigation_wraps_categories() {
    let mut app = app();
    press(&mut app, &[InputEvent::Up]);
    assert_eq!(app.focus.category, 2);
    press(&mut app, &[InputEvent::Char('j')]);
    assert_eq!(app.focus.category, 0);
}

#[test]
fn test_enter_on_add_tile_opens_panel() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Enter);
    assert!(app.panel.is_none());
    press(&mut app, &[InputEvent::Down, InputEvent::BackTab, InputEvent::Enter]);
    assert_eq!(app.panel.as_ref().map(|p| p.target()), Some("cwpp-dashboard"));
}

#[test]
fn test_status_cleared_on_next_key() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Char('d'));
    assert!(app.status.is_some());
    apply_event(&mut app, InputEvent::Right);
    assert!(app.status.is_none());
}

#[test]
fn test_resize_and_none_are_ignored() {
    let mut app = app();
    press(&mut app, &[InputEvent::Resize(10, 10), InputEvent::None]);
    assert_eq!(app.focus.category, 0);
    assert!(!app.should_quit);
    assert_eq!(app.store().revision(), 0);
}
