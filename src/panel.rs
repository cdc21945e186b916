//! # Module: Add-Widget Panel
//!
//! ## Responsibility
//! Input state and actions of the add-widget side panel: authoring a new
//! widget from free text, and copying a selection of existing widgets into
//! the panel's target category.
//!
//! ## Guarantees
//! - The target category is fixed for the panel's lifetime
//! - Copies never move or modify the source widget
//! - Widgets already in the target category are never duplicated
//!
//! ## NOT Responsible For
//! - Drawing the panel (that belongs to `tui::widgets::panel`)
//! - Key handling (that belongs to `tui::events`)

use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, info};

use crate::catalog::{DashboardState, Widget};
use crate::filter::filter_widgets;
use crate::state::{DashboardStore, WidgetDraft};

/// Editable state of an open add-widget panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWidgetPanel {
    target: String,
    /// Name input of the author form.
    pub name_input: String,
    /// Text input of the author form.
    pub text_input: String,
    /// Query for the existing-widget list.
    pub search_query: String,
    selection: IndexSet<String>,
    open: bool,
}

impl AddWidgetPanel {
    /// Opens a panel targeting `category_id`.
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            target: category_id.into(),
            name_input: String::new(),
            text_input: String::new(),
            search_query: String::new(),
            selection: IndexSet::new(),
            open: true,
        }
    }

    /// Category that additions go to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// `false` once a batch copy has completed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the author form would add anything.
    pub fn can_submit(&self) -> bool {
        !self.name_input.trim().is_empty()
    }

    /// Adds a widget from the author form, then clears both inputs.
    ///
    /// Leaves the inputs untouched and returns `false` when the name is blank
    /// or the store rejects the draft.
    pub fn submit_custom(&mut self, store: &mut DashboardStore) -> bool {
        let text = if self.text_input.is_empty() {
            None
        } else {
            Some(self.text_input.clone())
        };
        let draft = WidgetDraft {
            name: self.name_input.clone(),
            text,
        };
        if !store.add_widget(&self.target, draft) {
            return false;
        }
        self.name_input.clear();
        self.text_input.clear();
        true
    }

    /// Widgets from every category matching the panel's search query.
    pub fn visible_widgets(&self, state: &DashboardState) -> Vec<Arc<Widget>> {
        filter_widgets(state.all_widgets(), &self.search_query)
    }

    /// Flips membership of `widget_id` in the selection. Re-selecting a
    /// widget moves it to the end of the copy order.
    pub fn toggle(&mut self, widget_id: &str) {
        if !self.selection.shift_remove(widget_id) {
            self.selection.insert(widget_id.to_string());
        }
    }

    /// Whether `widget_id` is currently selected.
    pub fn is_selected(&self, widget_id: &str) -> bool {
        self.selection.contains(widget_id)
    }

    /// Number of selected widgets.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Copies every selected widget that lives outside the target category,
    /// in the order they were selected.
    ///
    /// Clears the selection and closes the panel. An empty selection does
    /// nothing and keeps the panel open.
    ///
    /// # Returns
    /// Number of widgets added.
    pub fn confirm_selection(&mut self, store: &mut DashboardStore) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        // Resolve against one snapshot so copies made in this batch are not
        // themselves considered.
        let snapshot = store.snapshot();
        let mut added = 0;
        for widget_id in &self.selection {
            let Some(widget) = snapshot.find_widget(widget_id) else {
                debug!(widget_id = %widget_id, "selected widget no longer exists");
                continue;
            };
            if widget.category_id == self.target {
                debug!(widget_id = %widget_id, "already in target category, skipped");
                continue;
            }
            let draft = WidgetDraft::with_text(widget.name.clone(), widget.text.clone());
            if store.add_widget(&self.target, draft) {
                added += 1;
            }
        }

        info!(
            target_category = %self.target,
            selected = self.selection.len(),
            added,
            "copied selected widgets"
        );
        self.selection.clear();
        self.open = false;
        added
    }
}
