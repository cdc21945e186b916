//! # Module: Widget Search
//!
//! ## Responsibility
//! Case-insensitive substring search over widget names and descriptions.
//! Shared by the dashboard search bar (per category) and the add panel
//! (across all categories).
//!
//! ## Guarantees
//! - Pure: never touches the inputs
//! - Stable: output preserves input order
//! - An empty query matches every widget

use std::sync::Arc;

use crate::catalog::{Category, DashboardState, Widget};

/// Returns `true` if the widget's name or text contains `query`, ignoring case.
pub fn matches(widget: &Widget, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    widget.name.to_lowercase().contains(&needle) || widget.text.to_lowercase().contains(&needle)
}

/// Keeps the widgets matching `query`, in their original order.
pub fn filter_widgets<'a, I>(widgets: I, query: &str) -> Vec<Arc<Widget>>
where
    I: IntoIterator<Item = &'a Arc<Widget>>,
{
    widgets
        .into_iter()
        .filter(|w| matches(w, query))
        .cloned()
        .collect()
}

/// Applies [`filter_widgets`] inside every category.
///
/// Categories are always returned, even when none of their widgets match,
/// so the view can render an empty state for them.
pub fn filter_categories(state: &DashboardState, query: &str) -> Vec<Category> {
    state
        .categories
        .iter()
        .map(|cat| Category {
            id: cat.id.clone(),
            name: cat.name.clone(),
            widgets: filter_widgets(&cat.widgets, query),
        })
        .collect()
}
