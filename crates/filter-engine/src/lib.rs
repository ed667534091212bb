//! Filter engine for connector product catalogs.
//!
//! This crate provides:
//! - FilterCriteria and Selector for the type / gender / search dimensions
//! - Filter trait and one implementation per dimension
//! - FilterPipeline for composing filters
//! - Facet derivation for populating selectors
//! - CatalogSession, which owns the catalog and criteria for one caller
//!
//! ## Architecture
//! Evaluation is a pure function of catalog + criteria:
//! 1. Each filter is an independent predicate over one product
//! 2. A product is visible only if every filter accepts it
//! 3. The result keeps catalog order
//!
//! ## Example Usage
//! ```ignore
//! use catalog_loader::Catalog;
//! use filter_engine::{CatalogSession, CatalogView, Selector};
//!
//! let mut session = CatalogSession::new(Catalog::load_from_file(path)?);
//! session.set_type(Selector::exact("Type-C"));
//! session.set_search("cable");
//!
//! match session.view() {
//!     CatalogView::EmptyCatalog => eprintln!("no data"),
//!     CatalogView::NoMatches => eprintln!("no results"),
//!     CatalogView::Matches(products) => render(&products),
//! }
//! ```

pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod facets;
pub mod session;

// Re-export main types
pub use criteria::{FilterCriteria, Selector, MATCH_ALL};
pub use traits::Filter;
pub use filter_pipeline::{apply, FilterPipeline};
pub use facets::{derive_facets, derive_gender_facets, derive_type_facets};
pub use session::{CatalogSession, CatalogView};
