//! Catalog loading module
//!
//! This module provides functionality for loading product records from
//! catalog dumps. Sourcing and validation live here, outside the engine.

mod json;

pub use json::{JsonLoader, LoadError};
