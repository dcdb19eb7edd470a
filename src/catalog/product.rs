//! Product data structures
//!
//! Defines the product record used throughout the query engine. Every
//! optional field has an explicit default so that partial records loaded
//! from a catalog dump never fail downstream.

use serde::{Deserialize, Serialize};

/// Closed set of category labels recognized by the presentation layer.
///
/// The filter compares category strings opaquely; this list exists for
/// dropdown-style listings and the `categories` CLI command.
pub const CATEGORIES: &[&str] = &["Electronics", "Furniture", "Books", "Clothing", "Other"];

/// A product record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier. Digits embedded in the id double as a
    /// creation-order proxy for the newest-first sort.
    pub id: String,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label, normally one of [`CATEGORIES`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price in display units; treated as 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Reference to a visual asset, opaque to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with only an id; optional fields start empty
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            category: None,
            price: None,
            image: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Title text, defaulting to empty when absent
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Description text, defaulting to empty when absent
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Price for comparison purposes; absent prices sort as zero
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Check whether the product carries the given category label (exact,
    /// case-sensitive match)
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}
