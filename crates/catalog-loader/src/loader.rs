//! Building a Catalog from raw text or from a file on disk.
//!
//! Reading the file is the only fallible step. Whatever text comes back is
//! handed to the parser, which keeps every usable row in order.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::Catalog;
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Parse raw catalog text.
    pub fn parse(raw: &str) -> Self {
        Self::from_products(parser::parse(raw))
    }

    /// Load and parse a catalog file.
    ///
    /// The file is read whole. Invalid UTF-8 sequences are replaced rather
    /// than rejected, matching the parser's tolerance for messy exports.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);

        let bytes = fs::read(path).map_err(|source| CatalogError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let catalog = Self::parse(&text);
        info!("Loaded {} products", catalog.len());
        Ok(catalog)
    }

    /// Treat a catalog without products as an error.
    pub fn require_non_empty(self) -> Result<Self> {
        if self.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(self)
    }
}
