//! Catalog filtering
//!
//! Reduces the full product list to the subset matching the free-text query
//! and the category constraint. Output preserves input order; no sorting
//! happens here.

use crate::catalog::Product;

/// Filter `products` by free-text query and category constraint.
///
/// A product is retained iff:
/// - `query` is empty, OR the title contains it (case-insensitive), OR the
///   description contains it (case-insensitive); and
/// - `category` is empty/absent, OR the product's category label equals it
///   exactly (case-sensitive).
///
/// Absent text fields are treated as empty strings, so filtering never fails
/// on partial records. The result is a stable subsequence of the input.
pub fn filter_products(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches_query(p, &needle) && matches_category(p, category))
        .cloned()
        .collect()
}

/// Text predicate; `needle` must already be lowercased
fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title_text().to_lowercase().contains(needle)
        || product.description_text().to_lowercase().contains(needle)
}

/// Category predicate; an empty constraint retains everything
fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        None | Some("") => true,
        Some(label) => product.in_category(label),
    }
}
