//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns the dashboard store plus every piece of view state: search query,
//! focus, help overlay, and the add-widget panel. Exposes the intents the
//! view raises (`add_widget`, `remove_widget`, `open_add_panel`,
//! `close_add_panel`) as methods.
//!
//! ## Guarantees
//! - Focus is always clamped to the currently visible categories and tiles
//! - `open_add_panel` ignores unknown category ids
//! - No method panics on any input

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{Category, DashboardState, Widget};
use crate::config::UiConfig;
use crate::filter::filter_categories;
use crate::panel::AddWidgetPanel;
use crate::state::{DashboardStore, WidgetDraft};

/// Input mode of the main dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating cards.
    Browse,
    /// Typing into the dashboard search bar.
    Search,
}

/// Which control of the add panel receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    /// Author form: widget name.
    Name,
    /// Author form: widget text.
    Text,
    /// Search box over existing widgets.
    Search,
    /// Checkbox list of existing widgets.
    List,
}

impl PanelField {
    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Text,
            Self::Text => Self::Search,
            Self::Search => Self::List,
            Self::List => Self::Name,
        }
    }

    /// Previous field in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Text => Self::Name,
            Self::Search => Self::Text,
            Self::List => Self::Search,
        }
    }
}

/// Focused tile on the dashboard.
///
/// `tile == widgets.len()` addresses the trailing "Add Widget" tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    /// Index into the category list.
    pub category: usize,
    /// Index into the category's visible widgets.
    pub tile: usize,
}

/// Primary application state for the editor.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Dashboard input mode.
    pub mode: Mode,
    /// Dashboard search query.
    pub search_query: String,
    /// Focused tile.
    pub focus: Focus,
    /// Open add panel, if any.
    pub panel: Option<AddWidgetPanel>,
    /// Focused panel control.
    pub panel_field: PanelField,
    /// Highlighted row in the panel's widget list.
    pub panel_cursor: usize,
    /// One-line feedback shown in the footer.
    pub status: Option<String>,
    /// Size guard and timing.
    pub ui: UiConfig,
    store: DashboardStore,
}

impl App {
    /// Creates an `App` over `store`.
    pub fn new(store: DashboardStore, ui: UiConfig) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            mode: Mode::Browse,
            search_query: String::new(),
            focus: Focus::default(),
            panel: None,
            panel_field: PanelField::Name,
            panel_cursor: 0,
            status: None,
            ui,
            store,
        }
    }

    /// Current dashboard state.
    pub fn state(&self) -> &DashboardState {
        self.store.state()
    }

    /// Underlying store.
    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    /// Categories with widgets filtered by the dashboard search query.
    pub fn visible_categories(&self) -> Vec<Category> {
        filter_categories(self.store.state(), &self.search_query)
    }

    /// `(category_id, widget)` under focus, if focus is on a widget card.
    pub fn focused_widget(&self) -> Option<(String, Arc<Widget>)> {
        let cats = self.visible_categories();
        let cat = cats.get(self.focus.category)?;
        let widget = cat.widgets.get(self.focus.tile)?;
        Some((cat.id.clone(), Arc::clone(widget)))
    }

    /// Id of the focused category.
    pub fn focused_category_id(&self) -> Option<String> {
        self.store
            .state()
            .categories
            .get(self.focus.category)
            .map(|c| c.id.clone())
    }

    // ── Intents ─────────────────────────────────────────────────────────

    /// Adds a widget to `category_id`.
    pub fn add_widget(&mut self, category_id: &str, draft: WidgetDraft) -> bool {
        let added = self.store.add_widget(category_id, draft);
        self.clamp_focus();
        added
    }

    /// Removes a widget from `category_id`.
    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) -> bool {
        let removed = self.store.remove_widget(category_id, widget_id);
        self.clamp_focus();
        removed
    }

    /// Opens the add panel targeting `category_id`. Unknown ids are ignored.
    pub fn open_add_panel(&mut self, category_id: &str) {
        if self.store.state().category(category_id).is_none() {
            debug!(category_id, "open_add_panel ignored: unknown category");
            return;
        }
        self.panel = Some(AddWidgetPanel::new(category_id));
        self.panel_field = PanelField::Name;
        self.panel_cursor = 0;
        self.mode = Mode::Browse;
        info!(category_id, "add panel opened");
    }

    /// Closes the add panel, discarding its inputs and selection.
    pub fn close_add_panel(&mut self) {
        if self.panel.take().is_some() {
            debug!("add panel closed");
        }
    }

    /// Removes the focused widget card. Does nothing on the "Add Widget" tile.
    pub fn remove_focused(&mut self) -> bool {
        let Some((category_id, widget)) = self.focused_widget() else {
            return false;
        };
        let removed = self.remove_widget(&category_id, &widget.id);
        if removed {
            self.status = Some(format!("Removed \"{}\"", widget.name));
        }
        removed
    }

    /// Opens the add panel for the focused category.
    pub fn open_panel_for_focus(&mut self) {
        if let Some(id) = self.focused_category_id() {
            self.open_add_panel(&id);
        }
    }

    // ── Dashboard navigation ─────────────────────────────────────────────

    /// Moves focus to the next category, wrapping.
    pub fn focus_next_category(&mut self) {
        let n = self.store.state().categories.len();
        if n > 0 {
            self.focus.category = (self.focus.category + 1) % n;
            self.focus.tile = 0;
        }
    }

    /// Moves focus to the previous category, wrapping.
    pub fn focus_prev_category(&mut self) {
        let n = self.store.state().categories.len();
        if n > 0 {
            self.focus.category = (self.focus.category + n - 1) % n;
            self.focus.tile = 0;
        }
    }

    /// Moves focus to the next tile, wrapping onto the "Add Widget" tile.
    pub fn focus_next_tile(&mut self) {
        let tiles = self.tile_count();
        if tiles > 0 {
            self.focus.tile = (self.focus.tile + 1) % tiles;
        }
    }

    /// Moves focus to the previous tile, wrapping.
    pub fn focus_prev_tile(&mut self) {
        let tiles = self.tile_count();
        if tiles > 0 {
            self.focus.tile = (self.focus.tile + tiles - 1) % tiles;
        }
    }

    /// Whether focus rests on the "Add Widget" tile.
    pub fn focus_on_add_tile(&self) -> bool {
        self.focus.tile + 1 == self.tile_count()
    }

    fn tile_count(&self) -> usize {
        self.visible_categories()
            .get(self.focus.category)
            .map_or(0, |c| c.widgets.len() + 1)
    }

    /// Pulls focus back inside the visible categories and tiles.
    pub fn clamp_focus(&mut self) {
        let n = self.store.state().categories.len();
        if n == 0 {
            self.focus = Focus::default();
            return;
        }
        self.focus.category = self.focus.category.min(n - 1);
        let tiles = self.tile_count();
        self.focus.tile = self.focus.tile.min(tiles.saturating_sub(1));
    }

    // ── Dashboard search ────────────────────────────────────────────────

    /// Appends to the dashboard search query.
    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.clamp_focus();
    }

    /// Deletes the last search character.
    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.clamp_focus();
    }

    /// Clears the dashboard search query.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.clamp_focus();
    }

    // ── Panel actions ───────────────────────────────────────────────────

    /// Submits the panel's author form.
    pub fn panel_submit_custom(&mut self) -> bool {
        let Some(panel) = self.panel.as_mut() else {
            return false;
        };
        let name = panel.name_input.trim().to_string();
        let added = panel.submit_custom(&mut self.store);
        if added {
            self.status = Some(format!("Added \"{name}\""));
        }
        self.clamp_focus();
        added
    }

    /// Number of rows in the panel's widget list.
    pub fn panel_visible_len(&self) -> usize {
        self.panel
            .as_ref()
            .map_or(0, |p| p.visible_widgets(self.store.state()).len())
    }

    /// Moves the panel list cursor by `delta`, clamped to the list.
    pub fn panel_move_cursor(&mut self, delta: isize) {
        let len = self.panel_visible_len();
        if len == 0 {
            self.panel_cursor = 0;
            return;
        }
        let next = self.panel_cursor as isize + delta;
        self.panel_cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Toggles the widget under the panel list cursor.
    pub fn panel_toggle_cursor(&mut self) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let visible = panel.visible_widgets(self.store.state());
        if let Some(widget) = visible.get(self.panel_cursor) {
            panel.toggle(&widget.id);
        }
    }

    /// Copies the panel selection into its target and closes the panel.
    pub fn panel_confirm(&mut self) -> usize {
        let Some(panel) = self.panel.as_mut() else {
            return 0;
        };
        if panel.selection_len() == 0 {
            return 0;
        }
        let added = panel.confirm_selection(&mut self.store);
        if !panel.is_open() {
            self.panel = None;
        }
        self.status = Some(match added {
            1 => "Added 1 widget".to_string(),
            n => format!("Added {n} widgets"),
        });
        self.clamp_focus();
        added
    }

    /// Edits the panel's search query and resets the list cursor.
    pub fn panel_edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(panel) = self.panel.as_mut() {
            edit(&mut panel.search_query);
            self.panel_cursor = 0;
        }
    }
}
