//! Configuration validation engine.
//!
//! ## Responsibility
//! Validate semantic constraints on a parsed [`EditorConfig`] that cannot
//! be expressed through the type system alone.
//!
//! ## Guarantees
//! - Validation collects *all* errors before returning (no short-circuit)
//! - Error messages include the field path and the invalid value

use super::EditorConfig;

/// Upper bound on the poll timeout; anything slower feels frozen.
const MAX_TICK_RATE_MS: u64 = 5_000;

/// Errors arising from configuration parsing, validation, or I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more semantic validation rules failed.
    #[error("Validation failed in {file}: {reasons}")]
    Validation {
        /// Path of the file that failed validation.
        file: String,
        /// Every violation, one per line.
        reasons: String,
    },

    /// A specific field has an out-of-range or contradictory value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "ui.tick_rate_ms").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::InvalidField`].
    pub fn invalid(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Folds a list of violations into a single [`ConfigError::Validation`].
    pub fn from_violations(file: &str, errors: &[ConfigError]) -> Self {
        Self::Validation {
            file: file.to_string(),
            reasons: errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Validate all semantic constraints on an [`EditorConfig`].
///
/// # Returns
///
/// - `Ok(())` if all constraints pass.
/// - `Err(Vec<ConfigError>)` with every violation found.
pub fn validate(config: &EditorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // ── UI timing ────────────────────────────────────────────────────
    if config.ui.tick_rate_ms == 0 {
        errors.push(ConfigError::invalid(
            "ui.tick_rate_ms",
            0,
            "must be at least 1ms",
        ));
    } else if config.ui.tick_rate_ms > MAX_TICK_RATE_MS {
        errors.push(ConfigError::invalid(
            "ui.tick_rate_ms",
            config.ui.tick_rate_ms,
            format!("must be at most {MAX_TICK_RATE_MS}ms"),
        ));
    }

    // ── Size guard ───────────────────────────────────────────────────
    if config.ui.min_cols == 0 {
        errors.push(ConfigError::invalid("ui.min_cols", 0, "must be at least 1"));
    }
    if config.ui.min_rows == 0 {
        errors.push(ConfigError::invalid("ui.min_rows", 0, "must be at least 1"));
    }

    // ── Catalog path ─────────────────────────────────────────────────
    if let Some(path) = &config.catalog.path {
        if path.as_os_str().is_empty() {
            errors.push(ConfigError::invalid(
                "catalog.path",
                "\"\"",
                "omit the key to use the built-in catalog",
            ));
        }
    }

    // ── Log filter ───────────────────────────────────────────────────
    if config.observability.level.trim().is_empty() {
        errors.push(ConfigError::invalid(
            "observability.level",
            "\"\"",
            "log level must not be empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&EditorConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let mut config = EditorConfig::default();
        config.ui.tick_rate_ms = 0;
        let errors = validate(&config).err().unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("ui.tick_rate_ms"));
    }

    #[test]
    fn test_huge_tick_rate_rejected() {
        let mut config = EditorConfig::default();
        config.ui.tick_rate_ms = 60_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_min_size_rejected() {
        let mut config = EditorConfig::default();
        config.ui.min_cols = 0;
        config.ui.min_rows = 0;
        let errors = validate(&config).err().unwrap_or_default();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_empty_catalog_path_rejected() {
        let mut config = EditorConfig::default();
        config.catalog.path = Some(PathBuf::new());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_blank_level_rejected() {
        let mut config = EditorConfig::default();
        config.observability.level = "  ".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = EditorConfig::default();
        config.ui.tick_rate_ms = 0;
        config.ui.min_cols = 0;
        config.observability.level = String::new();
        let errors = validate(&config).err().unwrap_or_default();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_from_violations_joins_lines() {
        let errors = vec![
            ConfigError::invalid("a", 1, "bad"),
            ConfigError::invalid("b", 2, "worse"),
        ];
        let folded = ConfigError::from_violations("x.toml", &errors);
        let msg = folded.to_string();
        assert!(msg.contains("x.toml"));
        assert!(msg.contains("'a'"));
        assert!(msg.contains("'b'"));
    }
}
