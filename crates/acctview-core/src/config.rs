//! Console configuration
//!
//! ```toml
//! [logging]
//! profile = "production"
//!
//! [lists.api-logs]
//! page_size = 100
//! ```
//!
//! Every section is optional; missing values fall back to the list schema.

use crate::errors::{AcctViewError, Result};
use crate::lists::{ListKind, ListSchema};
use crate::logging_facility::Profile;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-list overrides keyed by list name
    #[serde(default)]
    pub lists: BTreeMap<String, ListConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    pub page_size: Option<usize>,
}

impl ConsoleConfig {
    /// Read and validate a TOML config file
    ///
    /// # Errors
    ///
    /// `Io` if the file is unreadable, `Config` if it does not parse, and
    /// `InvalidInput` if a value is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AcctViewError::io(path, &e))?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), lists = config.lists.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// Same as [`ConsoleConfig::load`] minus I/O.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: ConsoleConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject unknown list names and zero page sizes
    ///
    /// # Errors
    ///
    /// Returns `AcctViewError::InvalidInput` naming the offending list.
    pub fn validate(&self) -> Result<()> {
        for (name, list) in &self.lists {
            name.parse::<ListKind>().map_err(|_| {
                AcctViewError::invalid_input(format!("unknown list '{}' in [lists]", name))
            })?;
            if list.page_size == Some(0) {
                return Err(AcctViewError::invalid_input(format!(
                    "lists.{}.page_size must be at least 1",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Configured page size for a list, or the schema default
    pub fn page_size_for(&self, schema: &ListSchema) -> usize {
        self.lists
            .get(schema.name)
            .and_then(|list| list.page_size)
            .unwrap_or(schema.default_page_size)
    }
}
