//! # Module: Widget Catalog
//!
//! ## Responsibility
//! Defines the dashboard data model (categories, widgets, chart payloads) and
//! the built-in seed catalog the editor starts from.
//!
//! ## Guarantees
//! - Every category and widget is reference-counted so unchanged subtrees can
//!   be shared between successive `DashboardState` values
//! - The seed catalog satisfies the chart length invariant
//!
//! ## NOT Responsible For
//! - Mutating the tree (that belongs to `state`)
//! - Loading catalogs from disk (that belongs to `config::catalog`)

use std::sync::Arc;

use serde::Deserialize;

/// Parallel arrays describing a categorical proportion breakdown.
///
/// `labels[i]`, `values[i]` and `colors[i]` describe the same slice. Also
/// the shape of a `[categories.widgets.chart]` table in catalog files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartData {
    /// Slice labels, in display order.
    pub labels: Vec<String>,
    /// Slice magnitudes.
    pub values: Vec<f64>,
    /// Slice colors as `#rrggbb` strings.
    pub colors: Vec<String>,
}

impl ChartData {
    /// Builds a chart payload from string slices.
    pub fn new(labels: &[&str], values: &[f64], colors: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.to_vec(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns `true` if all three arrays have the same length.
    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.values.len() && self.values.len() == self.colors.len()
    }

    /// Sum of all slice values. Infinite when the values overflow `f64`.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// A single dashboard tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Session-unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Secondary description line.
    pub text: String,
    /// Id of the owning category.
    pub category_id: String,
    /// Optional proportion chart.
    pub chart_data: Option<ChartData>,
}

/// A named bucket holding an ordered list of widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Stable identifier, used as the join key for mutations.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Widgets in insertion order.
    pub widgets: Vec<Arc<Widget>>,
}

/// The single root of truth for the editor.
///
/// Never mutated in place; every change produces a new value. Cloning is
/// cheap because categories are shared behind `Arc`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    /// Categories in display order.
    pub categories: Vec<Arc<Category>>,
}

impl DashboardState {
    /// Wraps plain categories into a state value.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.into_iter().map(Arc::new).collect(),
        }
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Arc<Category>> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Iterates every widget across all categories, in display order.
    pub fn all_widgets(&self) -> impl Iterator<Item = &Arc<Widget>> {
        self.categories.iter().flat_map(|c| c.widgets.iter())
    }

    /// Finds a widget anywhere in the tree.
    pub fn find_widget(&self, id: &str) -> Option<&Arc<Widget>> {
        self.all_widgets().find(|w| w.id == id)
    }

    /// Total number of widgets across all categories.
    pub fn total_widgets(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }
}

fn seed_widget(id: &str, name: &str, text: &str, category_id: &str, chart: ChartData) -> Arc<Widget> {
    Arc::new(Widget {
        id: id.to_string(),
        name: name.to_string(),
        text: text.to_string(),
        category_id: category_id.to_string(),
        chart_data: Some(chart),
    })
}

/// Returns the built-in seed catalog: three categories, two widgets each.
pub fn initial_dashboard() -> DashboardState {
    DashboardState::new(vec![
        Category {
            id: "cspm-executive".into(),
            name: "CSPM Executive Dashboard".into(),
            widgets: vec![
                seed_widget(
                    "cloud-accounts",
                    "Cloud Accounts",
                    "Connected (2) | Not Connected (2)",
                    "cspm-executive",
                    ChartData::new(
                        &["Connected", "Not Connected"],
                        &[2.0, 2.0],
                        &["#3b82f6", "#e5e7eb"],
                    ),
                ),
                seed_widget(
                    "cloud-risk-assessment",
                    "Cloud Account Risk Assessment",
                    "9659 Total",
                    "cspm-executive",
                    ChartData::new(
                        &["Passed", "Warning", "Failed", "Not available"],
                        &[7253.0, 681.0, 1689.0, 36.0],
                        &["#10b981", "#f59e0b", "#ef4444", "#9ca3af"],
                    ),
                ),
            ],
        },
        Category {
            id: "cwpp-dashboard".into(),
            name: "CWPP Dashboard".into(),
            widgets: vec![
                seed_widget(
                    "namespace-alerts",
                    "Top 5 Namespace Specific Alerts",
                    "Alert Distribution",
                    "cwpp-dashboard",
                    ChartData::new(
                        &["Critical", "High", "Medium", "Low"],
                        &[12.0, 28.0, 45.0, 15.0],
                        &["#dc2626", "#ea580c", "#f59e0b", "#fbbf24"],
                    ),
                ),
                seed_widget(
                    "workload-alerts",
                    "Workload Alerts",
                    "Workload Status",
                    "cwpp-dashboard",
                    ChartData::new(
                        &["Healthy", "Warning", "Critical"],
                        &[156.0, 42.0, 8.0],
                        &["#10b981", "#f59e0b", "#ef4444"],
                    ),
                ),
            ],
        },
        Category {
            id: "registry-scan".into(),
            name: "Registry Scan".into(),
            widgets: vec![
                seed_widget(
                    "image-risk",
                    "Image Risk Assessment",
                    "1470 Total Vulnerabilities",
                    "registry-scan",
                    ChartData::new(
                        &["Critical", "High", "Medium", "Low"],
                        &[9.0, 150.0, 320.0, 991.0],
                        &["#dc2626", "#ea580c", "#f59e0b", "#fbbf24"],
                    ),
                ),
                seed_widget(
                    "image-security",
                    "Image Security Issues",
                    "2 Total images",
                    "registry-scan",
                    ChartData::new(
                        &["Secure", "Critical", "High"],
                        &[0.0, 2.0, 0.0],
                        &["#10b981", "#dc2626", "#ea580c"],
                    ),
                ),
            ],
        },
    ])
}
