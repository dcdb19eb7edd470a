//! Integration tests for the JSON catalog loader, including the full
//! file → query flow.

use catsift::loader::{JsonLoader, LoadError};
use catsift::{query_catalog, QueryConfig, SortMode};

const CATALOG_JSON: &str = r#"[
    {"id":"prod-001","title":"Red Chair","description":"Solid oak frame","category":"Furniture","price":50},
    {"id":"prod-002","title":"Blue Chair","description":"red cushion","category":"Furniture","price":30},
    {"id":"prod-003","title":"Lamp","category":"Electronics","price":10},
    {"id":"prod-004"}
]"#;

#[test]
fn load_catalog_file_and_query_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();

    let products = JsonLoader::load_from_file(&path).unwrap();
    assert_eq!(products.len(), 4);

    let output = query_catalog(&products, &QueryConfig::new().with_query("red"));
    let ids: Vec<&str> = output.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["prod-001", "prod-002"]);
}

#[test]
fn loaded_partial_records_survive_every_sort_mode() {
    let products = JsonLoader::load_from_str(CATALOG_JSON).unwrap();

    for mode in [
        SortMode::Relevance,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Newest,
    ] {
        let output = query_catalog(&products, &QueryConfig::new().with_sort(mode));
        assert_eq!(output.count, 4);
    }
}

#[test]
fn newest_sort_uses_loaded_id_digits() {
    let products = JsonLoader::load_from_str(CATALOG_JSON).unwrap();
    let output = query_catalog(&products, &QueryConfig::new().with_sort(SortMode::Newest));

    // prod-004 (4) > prod-003 (3) > prod-002 (2) > prod-001 (1)
    let ids: Vec<&str> = output.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["prod-004", "prod-003", "prod-002", "prod-001"]);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = JsonLoader::load_from_file(&path).unwrap_err();
    match err {
        LoadError::Io { path: reported, .. } => assert!(reported.contains("absent.json")),
        other => panic!("expected Io error, got {}", other),
    }
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ definitely not an array").unwrap();

    let err = JsonLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn empty_file_is_an_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "").unwrap();

    let products = JsonLoader::load_from_file(&path).unwrap();
    assert!(products.is_empty());
}
