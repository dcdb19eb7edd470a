//! Catalog data module
//!
//! This module defines the product record consumed by the query engine.

mod product;

pub use product::{Product, CATEGORIES};
