//! # Catalog Loader Crate
//!
//! This crate turns delimited product catalog text into an ordered, in-memory
//! [`Catalog`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Catalog)
//! - **parser**: Tolerant comma/tab row parser
//! - **loader**: Build a Catalog from text or from a file
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("products.csv"))?;
//!
//! for product in &catalog {
//!     println!("{} [{}]", product.name, product.connector_type);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::parse;
pub use types::{Catalog, Product};
