//! # Widget: Add-Widget Panel
//!
//! ## Responsibility
//! Draws the add panel as a side overlay: the author form, the search box
//! over existing widgets, the checkbox list, and the key hints.
//!
//! ## NOT Responsible For
//! - Panel state or actions (see `crate::panel`)

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::catalog::DashboardState;
use crate::panel::AddWidgetPanel;
use crate::tui::app::PanelField;

/// Terminals narrower than this get a full-width panel.
const NARROW_WIDTH: u16 = 100;

/// Region the panel occupies inside `area`: the right half, or all of it
/// on narrow terminals.
pub fn panel_area(area: Rect) -> Rect {
    if area.width < NARROW_WIDTH {
        return area;
    }
    let width = area.width / 2;
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

/// Label of the batch-confirm hint.
pub fn confirm_label(selected: usize) -> String {
    match selected {
        1 => "Add 1 Widget".to_string(),
        n => format!("Add {n} Widgets"),
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn input_line(value: &str, focused: bool, placeholder: &str) -> Line<'static> {
    if value.is_empty() && !focused {
        return Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Renders the add panel for `panel` over the right side of `area`.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Full dashboard area; the panel picks its own region.
/// * `panel` - Panel state to draw.
/// * `state` - Current dashboard, for the target name and the widget list.
/// * `field` - Control receiving keystrokes.
/// * `cursor` - Highlighted row of the widget list.
pub fn render(
    f: &mut Frame,
    area: Rect,
    panel: &AddWidgetPanel,
    state: &DashboardState,
    field: PanelField,
    cursor: usize,
) {
    let region = panel_area(area);
    f.render_widget(Clear, region);

    let target_name = state
        .category(panel.target())
        .map_or(panel.target(), |c| c.name.as_str());
    let outer = Block::default()
        .title(Span::styled(
            format!(" Add Widget to {target_name} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(" [Tab] next field  [Esc] cancel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(region);
    f.render_widget(outer, region);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // text
            Constraint::Length(1), // submit hint
            Constraint::Length(1), // divider
            Constraint::Length(3), // search
            Constraint::Min(3),    // list
            Constraint::Length(1), // confirm hint
        ])
        .split(inner);

    let name_focused = field == PanelField::Name;
    f.render_widget(
        Paragraph::new(input_line(&panel.name_input, name_focused, "Widget name"))
            .block(field_block(" Name ", name_focused)),
        chunks[0],
    );
    let text_focused = field == PanelField::Text;
    f.render_widget(
        Paragraph::new(input_line(&panel.text_input, text_focused, "Widget content"))
            .block(field_block(" Text ", text_focused)),
        chunks[1],
    );

    let submit_style = if panel.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        Paragraph::new(Span::styled("[Enter] Add Widget", submit_style)),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "── Or select from existing ──",
            Style::default().fg(Color::Gray),
        ))
        .alignment(ratatui::layout::Alignment::Center),
        chunks[3],
    );

    let search_focused = field == PanelField::Search;
    f.render_widget(
        Paragraph::new(input_line(
            &panel.search_query,
            search_focused,
            "Search widgets...",
        ))
        .block(field_block(" Search ", search_focused)),
        chunks[4],
    );

    render_list(f, chunks[5], panel, state, field == PanelField::List, cursor);

    let selected = panel.selection_len();
    let confirm_style = if selected > 0 {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("[Enter] {}", confirm_label(selected)), confirm_style),
            Span::styled("  [Space] select", Style::default().fg(Color::DarkGray)),
        ])),
        chunks[6],
    );
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    panel: &AddWidgetPanel,
    state: &DashboardState,
    focused: bool,
    cursor: usize,
) {
    let widgets = panel.visible_widgets(state);
    let block = field_block(" Existing widgets ", focused);

    if widgets.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No widgets found",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = widgets
        .iter()
        .map(|w| {
            let mark = if panel.is_selected(&w.id) { "[x] " } else { "[ ] " };
            let origin = state
                .category(&w.category_id)
                .map_or(w.category_id.as_str(), |c| c.name.as_str());
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Cyan)),
                Span::raw(w.name.clone()),
                Span::styled(format!("  ({origin})"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(cursor.min(widgets.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}
