//! # Module: Dashboard State Container
//!
//! ## Responsibility
//! Folds add/remove intents into new `DashboardState` values and owns the
//! current state for the UI through [`DashboardStore`].
//!
//! ## Guarantees
//! - The input state is never modified; callers holding an older value keep
//!   observing exactly what they had
//! - Unchanged categories are shared (`Arc::ptr_eq`) between old and new states
//! - Unknown ids and blank names are silent no-ops, never errors or panics
//! - Generated widget ids are unique for the lifetime of the process
//!
//! ## NOT Responsible For
//! - Filtering (that belongs to `filter`)
//! - Selection handling for batch copies (that belongs to `panel`)

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::{Category, DashboardState, Widget};

/// Text given to new widgets when the draft carries none.
pub const DEFAULT_WIDGET_TEXT: &str = "Widget content";

/// Minimal user input for a new widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetDraft {
    /// Display name. Must be non-blank after trimming.
    pub name: String,
    /// Description; `None` falls back to [`DEFAULT_WIDGET_TEXT`].
    pub text: Option<String>,
}

impl WidgetDraft {
    /// Draft with a name and no text.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }

    /// Draft with both name and text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
        }
    }
}

/// Generates a fresh widget id.
pub fn next_widget_id() -> String {
    format!("widget-{}", Uuid::new_v4())
}

/// Rebuilds the category with `category_id` through `f`, sharing every other
/// category with `state`.
///
/// Returns `None` when no category matches or when `f` declines to produce a
/// replacement, so callers can hand back the original value untouched.
pub fn update_category<F>(state: &DashboardState, category_id: &str, f: F) -> Option<DashboardState>
where
    F: FnOnce(&Category) -> Option<Category>,
{
    let index = state.categories.iter().position(|c| c.id == category_id)?;
    let replacement = f(&state.categories[index])?;
    let mut categories = state.categories.clone();
    categories[index] = Arc::new(replacement);
    Some(DashboardState { categories })
}

/// Appends a new widget built from `draft` to the category `category_id`.
///
/// Returns a clone of `state` when the category does not exist or when the
/// draft name is blank.
pub fn add_widget(state: &DashboardState, category_id: &str, draft: WidgetDraft) -> DashboardState {
    if draft.name.trim().is_empty() {
        debug!(category_id, "add_widget rejected: blank name");
        return state.clone();
    }

    let next = update_category(state, category_id, |cat| {
        let widget = Widget {
            id: next_widget_id(),
            name: draft.name,
            text: draft
                .text
                .unwrap_or_else(|| DEFAULT_WIDGET_TEXT.to_string()),
            category_id: cat.id.clone(),
            chart_data: None,
        };
        debug!(category_id, widget_id = %widget.id, "widget appended");
        let mut widgets = cat.widgets.clone();
        widgets.push(Arc::new(widget));
        Some(Category {
            id: cat.id.clone(),
            name: cat.name.clone(),
            widgets,
        })
    });

    next.unwrap_or_else(|| {
        debug!(category_id, "add_widget rejected: unknown category");
        state.clone()
    })
}

/// Removes widget `widget_id` from category `category_id`.
///
/// Returns a clone of `state` when either id is unknown.
pub fn remove_widget(state: &DashboardState, category_id: &str, widget_id: &str) -> DashboardState {
    let next = update_category(state, category_id, |cat| {
        if !cat.widgets.iter().any(|w| w.id == widget_id) {
            return None;
        }
        Some(Category {
            id: cat.id.clone(),
            name: cat.name.clone(),
            widgets: cat
                .widgets
                .iter()
                .filter(|w| w.id != widget_id)
                .cloned()
                .collect(),
        })
    });

    next.unwrap_or_else(|| {
        debug!(category_id, widget_id, "remove_widget: nothing to remove");
        state.clone()
    })
}

/// Owns the current dashboard state for the UI.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    state: DashboardState,
    revision: u64,
}

impl DashboardStore {
    /// Creates a store seeded with `state`.
    pub fn new(state: DashboardState) -> Self {
        Self { state, revision: 0 }
    }

    /// Borrow the current state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Cheap clone of the current state; later mutations do not affect it.
    pub fn snapshot(&self) -> DashboardState {
        self.state.clone()
    }

    /// Number of effective mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds a widget; returns `true` if the state changed.
    pub fn add_widget(&mut self, category_id: &str, draft: WidgetDraft) -> bool {
        let name = draft.name.clone();
        let next = add_widget(&self.state, category_id, draft);
        let changed = self.replace(next);
        if changed {
            info!(category_id, name = %name, revision = self.revision, "widget added");
        }
        changed
    }

    /// Removes a widget; returns `true` if the state changed.
    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) -> bool {
        let next = remove_widget(&self.state, category_id, widget_id);
        let changed = self.replace(next);
        if changed {
            info!(category_id, widget_id, revision = self.revision, "widget removed");
        }
        changed
    }

    fn replace(&mut self, next: DashboardState) -> bool {
        // A no-op hands back a clone whose category Arcs are all shared.
        let unchanged = next.categories.len() == self.state.categories.len()
            && next
                .categories
                .iter()
                .zip(&self.state.categories)
                .all(|(a, b)| Arc::ptr_eq(a, b));
        if unchanged {
            return false;
        }
        self.state = next;
        self.revision += 1;
        true
    }
}
