//! catsift: In-memory product catalog query engine
//!
//! This library filters, ranks, and sorts a list of product records against
//! a free-text query, a category constraint, and a sort mode. The engine is
//! a fixed pipeline of pure functions: it performs no I/O, holds no state
//! between calls, and never mutates its input.
//!
//! # Features
//!
//! - Relevance scoring over title and description text
//! - Combined free-text and category filtering
//! - Four sort modes: relevance, price ascending/descending, newest-first
//! - Deterministic tie-breaking (score, then price, then original order)
//! - Tolerant JSON catalog loading with per-field defaults
//!
//! # Modules
//!
//! - `catalog`: Product record and the closed category label set
//! - `config`: Query parameters, sort modes, and application configuration
//! - `engine`: The filter → sort pipeline (scorer, filter, sorter)
//! - `loader`: JSON catalog loading

pub mod catalog;
pub mod config;
pub mod engine;
pub mod loader;

// Re-export commonly used types
pub use catalog::{Product, CATEGORIES};
pub use config::{QueryConfig, SortMode};
pub use engine::{query_catalog, QueryOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
