//! Relevance scoring
//!
//! Scores a (product, query) pair by case-insensitive substring containment
//! over the product's text fields. Title hits outweigh description hits.

use crate::catalog::Product;

/// Points awarded for a query hit in the title
const TITLE_WEIGHT: u32 = 2;

/// Points awarded for a query hit in the description
const DESCRIPTION_WEIGHT: u32 = 1;

/// Compute the relevance score of `product` against `query`.
///
/// An empty query always scores 0. Title and description are tested
/// independently, so a product matching in both scores
/// `TITLE_WEIGHT + DESCRIPTION_WEIGHT`. Absent text fields count as empty
/// strings and simply fail to match.
pub fn relevance_score(product: &Product, query: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let needle = query.to_lowercase();
    let mut score = 0;

    if product.title_text().to_lowercase().contains(&needle) {
        score += TITLE_WEIGHT;
    }
    if product.description_text().to_lowercase().contains(&needle) {
        score += DESCRIPTION_WEIGHT;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_scores_zero() {
        let product = Product::new("p1").with_title("Red Chair");
        assert_eq!(relevance_score(&product, ""), 0);
    }

    #[test]
    fn test_title_match_scores_two() {
        let product = Product::new("p1").with_title("Red Chair");
        assert_eq!(relevance_score(&product, "red"), 2);
    }

    #[test]
    fn test_description_match_scores_one() {
        let product = Product::new("p2")
            .with_title("Blue Chair")
            .with_description("red cushion");
        assert_eq!(relevance_score(&product, "red"), 1);
    }

    #[test]
    fn test_both_fields_match_scores_three() {
        let product = Product::new("p3")
            .with_title("Red Chair")
            .with_description("a deep red finish");
        assert_eq!(relevance_score(&product, "red"), 3);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let product = Product::new("p4").with_title("Lamp");
        assert_eq!(relevance_score(&product, "red"), 0);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let product = Product::new("p5").with_title("RED CHAIR");
        assert_eq!(relevance_score(&product, "Red"), 2);
        assert_eq!(relevance_score(&product, "chair"), 2);
    }

    #[test]
    fn test_missing_fields_never_panic() {
        let product = Product::new("p6");
        assert_eq!(relevance_score(&product, "anything"), 0);
    }

    #[test]
    fn test_score_ordering_property() {
        // title match > description-only match > no match
        let title_hit = Product::new("a").with_title("Red Chair");
        let desc_hit = Product::new("b").with_description("red cushion");
        let miss = Product::new("c").with_title("Lamp");

        let ts = relevance_score(&title_hit, "red");
        let ds = relevance_score(&desc_hit, "red");
        let ns = relevance_score(&miss, "red");

        assert!(ts > ds);
        assert!(ds > ns);
    }
}
