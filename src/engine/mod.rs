//! Query engine
//!
//! The filter → sort pipeline over an in-memory product list. Every stage is
//! a pure function: the engine holds no state between calls, performs no
//! I/O, and never mutates its input.

mod filter;
mod scorer;
mod sorter;

pub use filter::filter_products;
pub use scorer::relevance_score;
pub use sorter::{id_ordinal, sort_products};

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::config::QueryConfig;

/// Result of a catalog query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutput {
    /// Ordered products; always a permutation of the filtered subset of the
    /// input
    pub items: Vec<Product>,
    /// Number of items; always equals `items.len()`
    pub count: usize,
}

/// Run the full filter → sort pipeline over `products`.
///
/// Re-running with identical inputs produces identical output.
pub fn query_catalog(products: &[Product], config: &QueryConfig) -> QueryOutput {
    let filtered = filter_products(products, &config.query, config.category.as_deref());
    let items = sort_products(&filtered, config.sort, &config.query);
    let count = items.len();

    tracing::debug!(
        query = %config.query,
        sort = config.sort.as_str(),
        total = products.len(),
        matched = count,
        "catalog query"
    );

    QueryOutput { items, count }
}
