//! # Widget: Dashboard Card
//!
//! ## Responsibility
//! Renders one dashboard widget: name, description, and a proportion chart
//! drawn as a stacked bar with a colored legend. Widgets without chart data
//! get a placeholder line.
//!
//! ## Guarantees
//! - Chart slices are drawn in the order given, labels/values/colors unchanged
//! - Stacked bar widths sum to the bar width whenever the total is positive
//! - Never panics on zero totals, empty charts, or malformed colors

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::{ChartData, Widget};

/// Shown in place of a chart when a widget has none.
pub const NO_CHART_PLACEHOLDER: &str = "No chart data available";

/// Fixed card height in rows, borders included.
pub const CARD_HEIGHT: u16 = 11;

/// Legend rows that fit below the bar.
const LEGEND_ROWS: usize = 4;

/// One chart slice ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment<'a> {
    /// Slice label.
    pub label: &'a str,
    /// Slice value.
    pub value: f64,
    /// Parsed slice color.
    pub color: Color,
}

/// Parses a `#rrggbb` color string.
///
/// # Returns
/// `Some(Color::Rgb)` for well-formed input, `None` otherwise.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Pairs labels, values and colors slice by slice, in order.
///
/// Unparseable colors fall back to gray. Pairing stops at the shortest array.
pub fn chart_segments(chart: &ChartData) -> Vec<ChartSegment<'_>> {
    chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.colors)
        .map(|((label, value), color)| ChartSegment {
            label,
            value: *value,
            color: parse_hex_color(color).unwrap_or(Color::Gray),
        })
        .collect()
}

/// Splits `width` cells across `values` in proportion, by largest remainder.
///
/// # Returns
/// One width per value. Sums to `width` when the total is positive; all
/// zeros otherwise. Negative and non-finite values count as zero.
pub fn proportion_widths(values: &[f64], width: usize) -> Vec<usize> {
    let clean: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let max = clean.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 || width == 0 {
        return vec![0; values.len()];
    }

    // Scaled into (0, 1] first so the sum stays finite for huge values.
    let scaled: Vec<f64> = clean.iter().map(|v| v / max).collect();
    let total: f64 = scaled.iter().sum();
    let exact: Vec<f64> = scaled.iter().map(|v| v / total * width as f64).collect();
    let mut widths: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();
    let assigned: usize = widths.iter().sum();

    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });
    for &i in order.iter().take(width.saturating_sub(assigned)) {
        widths[i] += 1;
    }
    widths
}

/// Formats a u64 with comma separators for readability.
///
/// # Returns
/// Formatted string, e.g. "1,847".
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    if len <= 3 {
        return s;
    }
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Formats a slice value: integers with separators, fractions to one decimal.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 {
        format_number(value as u64)
    } else {
        format!("{value:.1}")
    }
}

/// Builds the chart lines: a stacked bar followed by legend rows.
pub fn chart_lines(chart: &ChartData, width: usize) -> Vec<Line<'_>> {
    let segments = chart_segments(chart);
    let values: Vec<f64> = segments.iter().map(|s| s.value).collect();
    let widths = proportion_widths(&values, width);

    let bar: Vec<Span> = if widths.iter().all(|w| *w == 0) {
        vec![Span::styled(
            "\u{2591}".repeat(width),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        segments
            .iter()
            .zip(&widths)
            .filter(|(_, w)| **w > 0)
            .map(|(seg, w)| Span::styled("\u{2588}".repeat(*w), Style::default().fg(seg.color)))
            .collect()
    };

    let mut lines = vec![Line::from(bar), Line::from("")];
    for seg in segments.iter().take(LEGEND_ROWS) {
        lines.push(Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(seg.color)),
            Span::styled(format!("{}: ", seg.label), Style::default().fg(Color::Gray)),
            Span::styled(format_value(seg.value), Style::default().fg(Color::White)),
        ]));
    }
    if segments.len() > LEGEND_ROWS {
        lines.push(Line::from(Span::styled(
            format!("  +{} more", segments.len() - LEGEND_ROWS),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

/// Renders a widget card.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Rectangular area allocated for this card.
/// * `widget` - Widget to draw.
/// * `focused` - Whether the card has keyboard focus.
pub fn render(f: &mut Frame, area: Rect, widget: &Widget, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", widget.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            if focused { " [d] remove " } else { "" },
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            widget.text.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    match &widget.chart_data {
        Some(chart) => lines.extend(chart_lines(chart, inner.width as usize)),
        None => lines.push(Line::from(Span::styled(
            NO_CHART_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))),
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Renders the "Add Widget" tile that closes every category row.
pub fn render_add_tile(f: &mut Frame, area: Rect, focused: bool) {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top_pad = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "+ Add Widget  [a]",
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
