//! Render tests for the card, category and panel widgets.
//!
//! Each test draws into a `TestBackend` and checks the text on screen.

use std::sync::Arc;

use dashboard_editor::config::UiConfig;
use dashboard_editor::tui::app::{App, PanelField};
use dashboard_editor::tui::ui;
use dashboard_editor::tui::widgets::{card, category, panel};
use dashboard_editor::{
    initial_dashboard, AddWidgetPanel, Category, ChartData, DashboardStore, Widget,
};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

fn render_with<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut Frame),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test: terminal");
    terminal.draw(draw).expect("test: draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for row in 0..buffer.area.height {
        for col in 0..buffer.area.width {
            out.push_str(buffer[(col, row)].symbol());
        }
        out.push('\n');
    }
    out
}

fn plain_widget(name: &str, text: &str) -> Widget {
    Widget {
        id: "w".into(),
        name: name.into(),
        text: text.into(),
        category_id: "c".into(),
        chart_data: None,
    }
}

// ── Card ────────────────────────────────────────────────────────────────

#[test]
fn test_card_without_chart_shows_placeholder() {
    let widget = plain_widget("Uptime", "Widget content");
    let out = render_with(40, card::CARD_HEIGHT, |f| {
        let area = f.area();
        card::render(f, area, &widget, false)
    });
    assert!(out.contains("Uptime"));
    assert!(out.contains("Widget content"));
    assert!(out.contains(card::NO_CHART_PLACEHOLDER));
}

#[test]
fn test_card_with_chart_shows_legend_in_order() {
    let mut widget = plain_widget("Cloud Accounts", "Connected (2) | Not Connected (2)");
    widget.chart_data = Some(ChartData::new(
        &["Connected", "Not Connected"],
        &[2.0, 2.0],
        &["#3b82f6", "#e5e7eb"],
    ));
    let out = render_with(40, card::CARD_HEIGHT, |f| {
        let area = f.area();
        card::render(f, area, &widget, false)
    });
    let connected = out.find("Connected: 2").expect("test: first legend row");
    let not_connected = out.find("Not Connected: 2").expect("test: second legend row");
    assert!(connected < not_connected);
    assert!(!out.contains(card::NO_CHART_PLACEHOLDER));
}

#[test]
fn test_card_large_values_use_separators() {
    let state = initial_dashboard();
    let widget = state
        .find_widget("cloud-risk-assessment")
        .cloned()
        .expect("test: seed widget");
    let out = render_with(40, card::CARD_HEIGHT, |f| {
        let area = f.area();
        card::render(f, area, &widget, false)
    });
    assert!(out.contains("Passed: 7,253"));
    assert!(out.contains("Failed: 1,689"));
}

#[test]
fn test_card_focus_shows_remove_hint() {
    let widget = plain_widget("Uptime", "x");
    let focused = render_with(40, card::CARD_HEIGHT, |f| {
        let area = f.area();
        card::render(f, area, &widget, true)
    });
    let unfocused = render_with(40, card::CARD_HEIGHT, |f| {
        let area = f.area();
        card::render(f, area, &widget, false)
    });
    assert!(focused.contains("[d] remove"));
    assert!(!unfocused.contains("[d] remove"));
}

#[test]
fn test_card_mismatched_chart_does_not_panic() {
    let mut widget = plain_widget("Broken", "x");
    widget.chart_data = Some(ChartData {
        labels: vec!["A".into(), "B".into(), "C".into()],
        values: vec![1.0],
        colors: vec![],
    });
    let out = render_with(40, card::CARD_HEIGHT, |f| {
        let area = f.area();
        card::render(f, area, &widget, false)
    });
    assert!(out.contains("Broken"));
}

#[test]
fn test_card_tiny_area_does_not_panic() {
    let widget = initial_dashboard()
        .find_widget("image-risk")
        .cloned()
        .expect("test: seed widget");
    render_with(10, 3, |f| {
        let area = f.area();
        card::render(f, area, &widget, true)
    });
}

// ── Category ────────────────────────────────────────────────────────────

#[test]
fn test_category_renders_cards_and_add_tile() {
    let state = initial_dashboard();
    let cat = Arc::clone(&state.categories[2]);
    let width = category::CARD_MIN_WIDTH * 3 + 2;
    let height = category::section_height(&cat, width);
    let out = render_with(width, height, |f| {
        let area = f.area();
        category::render(f, area, &cat, None)
    });
    assert!(out.contains("Registry Scan"));
    assert!(out.contains("Image Risk Assessment"));
    assert!(out.contains("Image Security Issues"));
    assert!(out.contains("+ Add Widget"));
}

#[test]
fn test_empty_category_renders_empty_state() {
    let cat = Category {
        id: "empty".into(),
        name: "Empty".into(),
        widgets: Vec::new(),
    };
    let out = render_with(60, category::section_height(&cat, 60), |f| {
        let area = f.area();
        category::render(f, area, &cat, Some(0))
    });
    assert!(out.contains("No widgets in this category"));
    assert!(out.contains("+ Add Widget"));
}

#[test]
fn test_category_clipped_height_does_not_panic() {
    let state = initial_dashboard();
    let cat = Arc::clone(&state.categories[0]);
    let out = render_with(40, 5, |f| {
        let area = f.area();
        category::render(f, area, &cat, Some(1))
    });
    assert!(out.contains("CSPM Executive Dashboard"));
}

// ── Panel ───────────────────────────────────────────────────────────────

#[test]
fn test_panel_lists_every_widget_unchecked() {
    let state = initial_dashboard();
    let add_panel = AddWidgetPanel::new("cwpp-dashboard");
    let out = render_with(100, 40, |f| {
        let area = f.area();
        panel::render(f, area, &add_panel, &state, PanelField::Name, 0)
    });
    assert!(out.contains("Add Widget to CWPP Dashboard"));
    assert_eq!(out.matches("[ ] ").count(), 6);
    assert!(out.contains("Add 0 Widgets"));
}

#[test]
fn test_panel_shows_selection() {
    let state = initial_dashboard();
    let mut add_panel = AddWidgetPanel::new("cwpp-dashboard");
    add_panel.toggle("image-risk");
    let out = render_with(100, 40, |f| {
        let area = f.area();
        panel::render(f, area, &add_panel, &state, PanelField::List, 4)
    });
    assert_eq!(out.matches("[x] ").count(), 1);
    assert!(out.contains("Add 1 Widget"));
}

#[test]
fn test_panel_no_matches() {
    let state = initial_dashboard();
    let mut add_panel = AddWidgetPanel::new("cwpp-dashboard");
    add_panel.search_query = "zzz".into();
    let out = render_with(100, 40, |f| {
        let area = f.area();
        panel::render(f, area, &add_panel, &state, PanelField::Search, 0)
    });
    assert!(out.contains("No widgets found"));
}

#[test]
fn test_panel_area_is_inside_frame() {
    let area = Rect::new(0, 0, 200, 50);
    let region = panel::panel_area(area);
    assert!(region.x + region.width <= area.width);
    assert_eq!(region.height, area.height);
}

// ── Full frame ──────────────────────────────────────────────────────────

#[test]
fn test_full_frame_at_several_sizes() {
    let app = App::new(DashboardStore::new(initial_dashboard()), UiConfig::default());
    for (w, h) in [(80, 24), (120, 40), (200, 60), (40, 10), (1, 1)] {
        let out = render_with(w, h, |f| ui::draw(f, &app));
        if w >= 80 && h >= 24 {
            assert!(out.contains("Dashboard Editor"), "missing title at {w}x{h}");
        }
    }
}

#[test]
fn test_full_frame_respects_configured_minimum() {
    let ui_config = UiConfig {
        min_cols: 150,
        ..UiConfig::default()
    };
    let app = App::new(DashboardStore::new(initial_dashboard()), ui_config);
    let out = render_with(120, 40, |f| ui::draw(f, &app));
    assert!(out.contains("Terminal too small"));
}

#[test]
fn test_full_frame_empty_dashboard() {
    let app = App::new(DashboardStore::default(), UiConfig::default());
    let out = render_with(100, 30, |f| ui::draw(f, &app));
    assert!(out.contains("No categories loaded"));
}
