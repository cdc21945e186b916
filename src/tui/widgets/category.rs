//! # Widget: Category Section
//!
//! ## Responsibility
//! Renders one category: a titled block holding its (filtered) widget cards
//! in rows, followed by an "Add Widget" tile, or an empty-state message when
//! no widget is visible.
//!
//! ## Guarantees
//! - Section height is a pure function of tile count and width
//! - Never panics on zero-width areas or empty categories

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::card::{self, CARD_HEIGHT};
use crate::catalog::Category;

/// Narrowest a card is allowed to get.
pub const CARD_MIN_WIDTH: u16 = 34;

/// Rows used by the empty-state message, borders included.
const EMPTY_HEIGHT: u16 = 5;

/// Number of cards that fit side by side in `width` columns (at least one).
pub fn cards_per_row(width: u16) -> usize {
    usize::from((width / CARD_MIN_WIDTH).max(1))
}

/// Height of a category section rendered `width` columns wide.
pub fn section_height(category: &Category, width: u16) -> u16 {
    if category.widgets.is_empty() {
        return EMPTY_HEIGHT;
    }
    let inner_width = width.saturating_sub(2);
    let tiles = category.widgets.len() + 1;
    let rows = tiles.div_ceil(cards_per_row(inner_width));
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    rows.saturating_mul(CARD_HEIGHT).saturating_add(2)
}

/// Renders one category section.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Rectangular area allocated for this section.
/// * `category` - Category with already-filtered widgets.
/// * `focused_tile` - Tile index with focus, if this category is focused.
pub fn render(f: &mut Frame, area: Rect, category: &Category, focused_tile: Option<usize>) {
    let title_style = if focused_tile.is_some() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", category.name), title_style))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if category.widgets.is_empty() {
        render_empty(f, inner, focused_tile.is_some());
        return;
    }

    let per_row = cards_per_row(inner.width);
    let tiles = category.widgets.len() + 1;
    let mut y = inner.y;
    for row_start in (0..tiles).step_by(per_row) {
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let constraints: Vec<Constraint> = (0..per_row)
            .map(|_| Constraint::Ratio(1, per_row as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(row_area);

        for (offset, cell) in cells.iter().enumerate() {
            let index = row_start + offset;
            let focused = focused_tile == Some(index);
            match category.widgets.get(index) {
                Some(widget) => card::render(f, *cell, widget, focused),
                None if index == tiles - 1 => card::render_add_tile(f, *cell, focused),
                None => {}
            }
        }
        y += CARD_HEIGHT;
    }
}

fn render_empty(f: &mut Frame, area: Rect, focused: bool) {
    let hint = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No widgets in this category",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("+ Add Widget  [a]", hint)),
    ])
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(para, area);
}
