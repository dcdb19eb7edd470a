//! Sort-mode dispatch and comparators
//!
//! Orders a filtered product list according to the selected sort mode. The
//! underlying sort is stable, so products the comparator considers equal keep
//! their filtered-list order.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use super::scorer::relevance_score;
use crate::catalog::Product;
use crate::config::SortMode;

/// Matches every non-digit character in a product id
static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid literal regex"));

/// Extract the digit sequence embedded in a product id.
///
/// Strips every non-digit character and parses the remainder base-10. Ids
/// with no digits, or whose digit run overflows `u64`, yield 0.
///
/// This is a creation-order proxy, not a true timestamp: it is only
/// monotonic if ids were assigned with increasing embedded digit sequences.
pub fn id_ordinal(id: &str) -> u64 {
    NON_DIGIT.replace_all(id, "").parse::<u64>().unwrap_or(0)
}

/// Sort `filtered` according to `sort`, returning a new vector.
///
/// The input slice is never mutated; sorting operates on a copy. `query` is
/// only consulted in relevance mode, where ties in score break by ascending
/// price and full ties keep their original order.
pub fn sort_products(filtered: &[Product], sort: SortMode, query: &str) -> Vec<Product> {
    let mut sorted = filtered.to_vec();
    match sort {
        SortMode::PriceAsc => sorted.sort_by(cmp_price),
        SortMode::PriceDesc => sorted.sort_by(|a, b| cmp_price(b, a)),
        SortMode::Newest => sorted.sort_by(|a, b| id_ordinal(&b.id).cmp(&id_ordinal(&a.id))),
        SortMode::Relevance => sorted.sort_by(|a, b| {
            relevance_score(b, query)
                .cmp(&relevance_score(a, query))
                .then_with(|| cmp_price(a, b))
        }),
    }
    sorted
}

/// Ascending price comparator; absent prices compare as 0
fn cmp_price(a: &Product, b: &Product) -> Ordering {
    a.price_or_zero()
        .partial_cmp(&b.price_or_zero())
        .unwrap_or(Ordering::Equal)
}
