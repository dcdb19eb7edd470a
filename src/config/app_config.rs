//! Application configuration module for catsift
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the catalog file (default: catalog.json)
    #[serde(default = "default_catalog_path")]
    catalog_path: String,

    /// Default sort mode: relevance, price-asc, price-desc, or newest
    #[serde(default = "default_sort")]
    default_sort: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_sort() -> String {
    "relevance".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            default_sort: default_sort(),
        }
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(catalog_path) = std::env::var("CATSIFT_CATALOG") {
            config.catalog_path = catalog_path;
        }

        if let Ok(sort) = std::env::var("CATSIFT_SORT") {
            config.default_sort = sort;
        }

        config
    }

    /// Merge with another config (other takes priority for non-default values)
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            catalog_path: if other.catalog_path != default_catalog_path() {
                other.catalog_path.clone()
            } else {
                self.catalog_path.clone()
            },
            default_sort: if other.default_sort != default_sort() {
                other.default_sort.clone()
            } else {
                self.default_sort.clone()
            },
        }
    }

    /// Override catalog_path
    pub fn with_catalog_path(mut self, path: &str) -> Self {
        self.catalog_path = path.to_string();
        self
    }

    /// Override default_sort
    pub fn with_default_sort(mut self, sort: &str) -> Self {
        self.default_sort = sort.to_string();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let valid_modes = ["relevance", "price-asc", "price-desc", "newest"];
        if !valid_modes.contains(&self.default_sort.as_str()) {
            return Err(anyhow!(
                "Invalid sort mode '{}'. Valid modes: {:?}",
                self.default_sort,
                valid_modes
            ));
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    // Getters
    pub fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    pub fn default_sort(&self) -> &str {
        &self.default_sort
    }
}
