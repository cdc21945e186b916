//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events, translates keys into mode-independent
//! `InputEvent`s, and applies them to the app according to the active mode
//! (help overlay, add panel, dashboard search, or browsing).
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit, even while typing

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode, PanelField};

/// A translated terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Ctrl+C.
    Quit,
    /// A printable character.
    Char(char),
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Enter.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Returns `InputEvent::None` on timeout or on any crossterm error.
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => translate_key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Translates a crossterm key event to an `InputEvent`.
pub fn translate_key(key: KeyEvent) -> InputEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => InputEvent::Quit,
            _ => InputEvent::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => InputEvent::Char(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Delete => InputEvent::Delete,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Esc => InputEvent::Escape,
        KeyCode::Tab => InputEvent::Tab,
        KeyCode::BackTab => InputEvent::BackTab,
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        KeyCode::Left => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
pub fn apply_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Quit => {
            app.should_quit = true;
            return;
        }
        InputEvent::Resize(_, _) | InputEvent::None => return,
        _ => {}
    }

    if app.show_help {
        // Any key closes help
        app.show_help = false;
        return;
    }

    app.status = None;

    if app.panel.is_some() {
        apply_panel_event(app, event);
        return;
    }

    match app.mode {
        Mode::Search => apply_search_event(app, event),
        Mode::Browse => apply_browse_event(app, event),
    }
}

fn apply_browse_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Char('q') | InputEvent::Char('Q') => app.should_quit = true,
        InputEvent::Escape => {
            if app.search_query.is_empty() {
                app.should_quit = true;
            } else {
                app.clear_search();
            }
        }
        InputEvent::Char('/') => app.mode = Mode::Search,
        InputEvent::Char('h') | InputEvent::Char('H') | InputEvent::Char('?') => {
            app.show_help = true
        }
        InputEvent::Char('a') | InputEvent::Char('A') => app.open_panel_for_focus(),
        InputEvent::Char('d') | InputEvent::Char('D') | InputEvent::Delete => {
            app.remove_focused();
        }
        InputEvent::Enter => {
            if app.focus_on_add_tile() {
                app.open_panel_for_focus();
            }
        }
        InputEvent::Up | InputEvent::Char('k') => app.focus_prev_category(),
        InputEvent::Down | InputEvent::Char('j') => app.focus_next_category(),
        InputEvent::Left | InputEvent::BackTab => app.focus_prev_tile(),
        InputEvent::Right | InputEvent::Tab => app.focus_next_tile(),
        _ => {}
    }
}

fn apply_search_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Char(c) => app.push_search_char(c),
        InputEvent::Backspace => app.pop_search_char(),
        InputEvent::Enter | InputEvent::Down | InputEvent::Tab => app.mode = Mode::Browse,
        InputEvent::Escape => {
            app.clear_search();
            app.mode = Mode::Browse;
        }
        _ => {}
    }
}

fn apply_panel_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Escape => {
            app.close_add_panel();
            return;
        }
        InputEvent::Tab => {
            app.panel_field = app.panel_field.next();
            return;
        }
        InputEvent::BackTab => {
            app.panel_field = app.panel_field.prev();
            return;
        }
        _ => {}
    }

    match app.panel_field {
        PanelField::Name | PanelField::Text => {
            let field = app.panel_field;
            match event {
                InputEvent::Enter => {
                    app.panel_submit_custom();
                }
                InputEvent::Down => app.panel_field = field.next(),
                InputEvent::Up => app.panel_field = field.prev(),
                InputEvent::Char(_) | InputEvent::Backspace => {
                    let Some(panel) = app.panel.as_mut() else {
                        return;
                    };
                    let input = if field == PanelField::Name {
                        &mut panel.name_input
                    } else {
                        &mut panel.text_input
                    };
                    if let InputEvent::Char(c) = event {
                        input.push(c);
                    } else {
                        input.pop();
                    }
                }
                _ => {}
            }
        }
        PanelField::Search => match event {
            InputEvent::Char(c) => app.panel_edit_search(|q| q.push(c)),
            InputEvent::Backspace => app.panel_edit_search(|q| {
                q.pop();
            }),
            InputEvent::Enter | InputEvent::Down => app.panel_field = PanelField::List,
            InputEvent::Up => app.panel_field = PanelField::Text,
            _ => {}
        },
        PanelField::List => match event {
            InputEvent::Up => {
                if app.panel_cursor == 0 {
                    app.panel_field = PanelField::Search;
                } else {
                    app.panel_move_cursor(-1);
                }
            }
            InputEvent::Down => app.panel_move_cursor(1),
            InputEvent::Char(' ') => app.panel_toggle_cursor(),
            InputEvent::Enter => {
                app.panel_confirm();
            }
            _ => {}
        },
    }
}
