//! Config - Screen Configuration

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::form::FormLayout;
use super::option::{SelectOption, default_categories, default_countries};
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_PAGE_SIZE, DEFAULT_SUBMIT_LATENCY_MS, DESCRIPTION_MAX_LEN,
};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

/// Configuration for one CRUD screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CrudConfig {
    /// Category select options
    pub categories: Vec<SelectOption>,
    /// Country select options (extended layout)
    pub countries: Vec<SelectOption>,
    /// Which fields the form tracks
    pub layout: FormLayout,
    /// Simulated write latency in milliseconds
    pub submit_latency_ms: u64,
    /// Make every simulated write fail
    pub simulate_failure: bool,
    /// Table rows per page
    pub page_size: usize,
    /// Description length limit (characters)
    pub description_max_len: usize,
    /// Locale code such as "en" or "zh"; detected from the system when unset
    pub locale: Option<String>,
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            countries: default_countries(),
            layout: FormLayout::Basic,
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            simulate_failure: false,
            page_size: DEFAULT_PAGE_SIZE,
            description_max_len: DESCRIPTION_MAX_LEN,
            locale: None,
        }
    }
}

impl CrudConfig {
    /// Parse and validate a TOML document. An empty document yields defaults.
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Load from the platform config directory
    pub fn load_or_default() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
        Self::load(&path)
    }

    /// Check option sets and limits
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::Invalid {
                message: "at least one category option is required".to_string(),
            });
        }
        check_options("categories", &self.categories)?;
        check_options("countries", &self.countries)?;
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be greater than zero".to_string(),
            });
        }
        if self.description_max_len == 0 {
            return Err(Error::Invalid {
                message: "description_max_len must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Simulated write latency
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }
}

fn check_options(list: &str, options: &[SelectOption]) -> Result<()> {
    let mut seen = HashSet::new();
    for option in options {
        if option.value.is_empty() {
            return Err(Error::Invalid {
                message: format!("{list}: option '{}' has an empty code", option.label),
            });
        }
        if !seen.insert(option.value.as_str()) {
            return Err(Error::Invalid {
                message: format!("{list}: duplicate code '{}'", option.value),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CrudConfig::from_toml_str("  \n").expect("config");
        assert_eq!(config, CrudConfig::default());
        assert_eq!(config.categories.len(), 5);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = CrudConfig::from_toml_str(
            r#"
            layout = "extended"
            submit_latency_ms = 250

            [[categories]]
            label = "Sports"
            value = "sports"
            "#,
        )
        .expect("config");
        assert_eq!(config.layout, FormLayout::Extended);
        assert_eq!(config.submit_latency(), Duration::from_millis(250));
        assert_eq!(config.categories, vec![SelectOption::new("Sports", "sports")]);
        assert_eq!(config.countries.len(), 3);
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let result = CrudConfig::from_toml_str(
            r#"
            [[categories]]
            label = "A"
            value = "same"

            [[categories]]
            label = "B"
            value = "same"
            "#,
        );
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = CrudConfig::from_toml_str("page_size = 0");
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = CrudConfig::from_toml_str("layout = [");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("crud-demo-does-not-exist.toml");
        let config = CrudConfig::load(&path).expect("config");
        assert_eq!(config, CrudConfig::default());
    }
}
