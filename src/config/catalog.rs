//! External catalog loading.
//!
//! ## Responsibility
//! Parse a TOML catalog file into a [`DashboardState`] that can replace the
//! built-in seed, validating the chart invariants first.
//!
//! ## Guarantees
//! - A loaded catalog has unique category and widget ids
//! - Every chart payload has equal-length arrays and finite, non-negative values
//! - Each widget's `category_id` is its owning category's id

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::validation::ConfigError;
use crate::catalog::{Category, ChartData, DashboardState, Widget};

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogFile {
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

/// One `[[categories]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryEntry {
    /// Category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// `[[categories.widgets]]` tables.
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,
}

/// One `[[categories.widgets]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WidgetEntry {
    /// Widget id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description line.
    #[serde(default)]
    pub text: String,
    /// Optional chart payload.
    pub chart: Option<ChartData>,
}

/// Load and validate a catalog file.
pub fn load_catalog_from_file(path: &Path) -> Result<DashboardState, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: path.display().to_string(),
        source: e,
    })?;
    load_catalog_from_str(&content, &path.display().to_string())
}

/// Load and validate a catalog from TOML text.
pub fn load_catalog_from_str(content: &str, source_name: &str) -> Result<DashboardState, ConfigError> {
    let file: CatalogFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
        file: source_name.to_string(),
        source: e,
    })?;
    validate_catalog(&file).map_err(|errors| ConfigError::from_violations(source_name, &errors))?;
    Ok(file.into_state())
}

/// Checks every catalog invariant, collecting all violations.
pub fn validate_catalog(file: &CatalogFile) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut category_ids = HashSet::new();
    let mut widget_ids = HashSet::new();

    for (ci, cat) in file.categories.iter().enumerate() {
        let cat_path = format!("categories[{ci}]");
        if cat.id.trim().is_empty() {
            errors.push(ConfigError::invalid(format!("{cat_path}.id"), "\"\"", "must not be empty"));
        } else if !category_ids.insert(cat.id.as_str()) {
            errors.push(ConfigError::invalid(format!("{cat_path}.id"), &cat.id, "duplicate category id"));
        }
        if cat.name.trim().is_empty() {
            errors.push(ConfigError::invalid(format!("{cat_path}.name"), "\"\"", "must not be empty"));
        }

        for (wi, widget) in cat.widgets.iter().enumerate() {
            let w_path = format!("{cat_path}.widgets[{wi}]");
            if widget.id.trim().is_empty() {
                errors.push(ConfigError::invalid(format!("{w_path}.id"), "\"\"", "must not be empty"));
            } else if !widget_ids.insert(widget.id.as_str()) {
                errors.push(ConfigError::invalid(format!("{w_path}.id"), &widget.id, "duplicate widget id"));
            }
            if widget.name.trim().is_empty() {
                errors.push(ConfigError::invalid(format!("{w_path}.name"), "\"\"", "must not be empty"));
            }
            if let Some(chart) = &widget.chart {
                validate_chart(chart, &format!("{w_path}.chart"), &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_chart(chart: &ChartData, path: &str, errors: &mut Vec<ConfigError>) {
    if !chart.is_consistent() {
        let (l, v, c) = (chart.labels.len(), chart.values.len(), chart.colors.len());
        errors.push(ConfigError::invalid(
            path,
            format!("labels={l} values={v} colors={c}"),
            "labels, values and colors must have equal length",
        ));
    }
    let mut values_ok = true;
    for (i, value) in chart.values.iter().enumerate() {
        if !value.is_finite() || *value < 0.0 {
            values_ok = false;
            errors.push(ConfigError::invalid(
                format!("{path}.values[{i}]"),
                value,
                "must be finite and non-negative",
            ));
        }
    }
    if values_ok && !chart.total().is_finite() {
        errors.push(ConfigError::invalid(
            format!("{path}.values"),
            chart.total(),
            "sum of values must be finite",
        ));
    }
}

impl CatalogFile {
    /// Converts a validated file into dashboard state.
    pub fn into_state(self) -> DashboardState {
        let categories = self
            .categories
            .into_iter()
            .map(|cat| {
                let widgets = cat
                    .widgets
                    .into_iter()
                    .map(|w| {
                        Arc::new(Widget {
                            id: w.id,
                            name: w.name,
                            text: w.text,
                            category_id: cat.id.clone(),
                            chart_data: w.chart,
                        })
                    })
                    .collect();
                Category {
                    id: cat.id,
                    name: cat.name,
                    widgets,
                }
            })
            .collect();
        DashboardState::new(categories)
    }
}
