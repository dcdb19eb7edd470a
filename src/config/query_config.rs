//! Query configuration structures
//!
//! Defines the sort modes and query parameters for the catalog engine.

use serde::{Deserialize, Serialize};

/// Sort mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Relevance-ranked: score descending, price-ascending tie-break
    #[default]
    Relevance,
    /// Price, low to high
    PriceAsc,
    /// Price, high to low
    PriceDesc,
    /// Newest first, by the digit sequence embedded in the product id
    Newest,
}

impl SortMode {
    /// Parse a sort-mode string leniently.
    ///
    /// The mode set is closed and caller-controlled, so unrecognized values
    /// fall back to [`SortMode::Relevance`] as a default branch rather than
    /// an error. A warning is logged for visibility.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "relevance" => Self::Relevance,
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "newest" => Self::Newest,
            other => {
                tracing::warn!("Unknown sort mode '{}', using relevance", other);
                Self::Relevance
            }
        }
    }

    /// Canonical string form (inverse of [`SortMode::parse_lenient`] for
    /// recognized modes)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Newest => "newest",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price — Low to High",
            Self::PriceDesc => "Price — High to Low",
            Self::Newest => "Newest First",
        }
    }
}

/// Query configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Free-text query; empty disables the text filter
    #[serde(default)]
    pub query: String,
    /// Category constraint; `None` (or empty) disables the category filter
    #[serde(default)]
    pub category: Option<String>,
    /// Sort mode to apply
    #[serde(default)]
    pub sort: SortMode,
}

impl QueryConfig {
    /// Create a new query configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the category constraint
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Set the sort mode
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}
