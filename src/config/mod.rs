//! Configuration module for catsift
//!
//! This module defines query parameters, sort modes, and application
//! configuration.

pub mod app_config;
pub mod path_resolver;
mod query_config;

pub use query_config::{QueryConfig, SortMode};
