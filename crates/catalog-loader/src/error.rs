//! Error types for the catalog-loader crate.
//!
//! Parsing itself never fails: malformed rows are skipped, not reported.
//! The only errors here belong to the edges around the parser:
//! - the source text could not be read
//! - the caller asked for a catalog that must contain at least one product

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The raw catalog text could not be read
    #[error("Catalog source unavailable: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but produced no usable rows
    ///
    /// Expected layout: `name,url,type,gender,imageId`, one product per line,
    /// comma or tab separated.
    #[error("No valid products found in catalog (expected rows of name,url,type,gender,imageId)")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
