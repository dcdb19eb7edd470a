//! JSON catalog loader
//!
//! Loads product records from a JSON array, the storage format of the
//! original catalog dumps. Records with missing optional fields deserialize
//! to their documented defaults; unknown fields are ignored.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::catalog::Product;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog source could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The catalog content is not a JSON array of products
    #[error("catalog is not a JSON array of products: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON loader for product catalogs
pub struct JsonLoader;

impl JsonLoader {
    /// Load products from a catalog file containing a JSON array
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    /// Load products from a reader (e.g., stdin)
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Vec<Product>, LoadError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| LoadError::Io {
                path: "<reader>".to_string(),
                source,
            })?;
        Self::load_from_str(&content)
    }

    /// Parse a JSON array of products.
    ///
    /// Empty or whitespace-only input yields an empty catalog, mirroring a
    /// store that has never been written to.
    pub fn load_from_str(content: &str) -> Result<Vec<Product>, LoadError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        let products: Vec<Product> = serde_json::from_str(trimmed)?;
        Ok(products)
    }
}
