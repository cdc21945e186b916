//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Divides the terminal into title, search bar, category sections and footer,
//! and delegates to the widget renderers. Handles the minimum size guard, the
//! add panel overlay and the help overlay.
//!
//! ## Guarantees
//! - The focused category is always scrolled into view
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Mode};
use super::widgets;

/// Renders the complete editor UI into the given frame.
///
/// # Arguments
/// * `f` - The Ratatui frame to render into.
/// * `app` - The application state to display.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    if size.width < app.ui.min_cols || size.height < app.ui.min_rows {
        draw_too_small(f, size, app.ui.min_cols, app.ui.min_rows);
        return;
    }

    let title = format!(
        " Dashboard Editor {:>width$} ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        width = (size.width as usize).saturating_sub(22),
    );
    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(footer_line(app))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(0),    // categories
        ])
        .split(inner);

    draw_search_bar(f, chunks[0], app);
    draw_categories(f, chunks[1], app);

    if let Some(panel) = &app.panel {
        widgets::panel::render(
            f,
            inner,
            panel,
            app.state(),
            app.panel_field,
            app.panel_cursor,
        );
    }

    if app.show_help {
        draw_help_overlay(f, size);
    }
}

fn footer_line(app: &App) -> Line<'static> {
    let keys = if app.panel.is_some() {
        " [Tab] field  [Space] select  [Enter] add  [Esc] close "
    } else {
        " [/]search  [a]dd  [d]elete  [h]elp  [q]uit "
    };
    let mut spans = vec![Span::styled(keys, Style::default().fg(Color::DarkGray))];
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!(" {status} "),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let searching = app.mode == Mode::Search;
    let border = if searching { Color::Cyan } else { Color::DarkGray };
    let shown: usize = app
        .visible_categories()
        .iter()
        .map(|c| c.widgets.len())
        .sum();

    let block = Block::default()
        .title(" Search ")
        .title_bottom(
            Line::from(format!(" {shown}/{} widgets ", app.state().total_widgets()))
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let line = if app.search_query.is_empty() && !searching {
        Line::from(Span::styled(
            "Press / to search widgets",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(app.search_query.clone())];
        if searching {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_categories(f: &mut Frame, area: Rect, app: &App) {
    let categories = app.visible_categories();
    if categories.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No categories loaded",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let heights: Vec<u16> = categories
        .iter()
        .map(|c| widgets::category::section_height(c, area.width))
        .collect();
    let (start, end) = visible_sections(&heights, area.height, app.focus.category);

    let bottom = area.y + area.height;
    let mut y = area.y;
    for index in start..end {
        let height = heights[index].min(bottom - y);
        let section = Rect::new(area.x, y, area.width, height);
        let focus = (index == app.focus.category).then_some(app.focus.tile);
        widgets::category::render(f, section, &categories[index], focus);
        y += height;
    }
}

/// Range of category sections to draw so the focused one is on screen.
///
/// Scrolls down just far enough for the focused section to end inside
/// `available` rows (or to start at the top when it is taller than that),
/// then extends the range over every section that starts above the bottom.
///
/// # Returns
/// Half-open `(start, end)` index range into `heights`.
pub fn visible_sections(heights: &[u16], available: u16, focus: usize) -> (usize, usize) {
    if heights.is_empty() || available == 0 {
        return (0, 0);
    }
    let focus = focus.min(heights.len() - 1);
    let span = |from: usize, to: usize| -> u32 {
        heights[from..to].iter().map(|&h| u32::from(h)).sum()
    };
    let available = u32::from(available);

    let mut start = 0;
    while start < focus && span(start, focus + 1) > available {
        start += 1;
    }
    let mut end = start + 1;
    while end < heights.len() && span(start, end) < available {
        end += 1;
    }
    (start, end)
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect, min_cols: u16, min_rows: u16) {
    let msg = format!("Terminal too small: resize to at least {min_cols}x{min_rows}");
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Centered popup of `width` x `height`, shrunk to fit inside `area`.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 56, 20);
    f.render_widget(Clear, popup_area);

    let key = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
    let heading = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::White)));

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Dashboard Editor",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("  Dashboard:"),
        key("    [↑↓ / jk] Category      [←→ / Tab] Card"),
        key("    [/] Search              [Esc] Clear search"),
        key("    [a / Enter on +] Add    [d / Del] Remove card"),
        key("    [q] Quit                [Ctrl+C] Force quit"),
        Line::from(""),
        heading("  Add panel:"),
        key("    [Tab / Shift+Tab] Next / previous field"),
        key("    [Enter] Add from form, or add selected"),
        key("    [Space] Select widget   [Esc] Close panel"),
        Line::from(""),
        key("    [h / ?] Toggle this help"),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}
