//! Session state: the current catalog plus the caller's criteria.
//!
//! The filter functions stay pure; this is the one place that owns mutable
//! state. A presentation layer mutates criteria through the setters and then
//! calls [`CatalogSession::view`] to recompute what should be visible.

use crate::criteria::{FilterCriteria, Selector};
use crate::facets::{derive_gender_facets, derive_type_facets};
use crate::filter_pipeline::FilterPipeline;
use catalog_loader::{Catalog, Product};
use tracing::{debug, info};

/// Result of evaluating the current criteria against the current catalog.
///
/// Keeps "there is no data" apart from "nothing matched", so a renderer can
/// show a diagnostic for the first and a "no results" hint for the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// The catalog holds no products at all
    EmptyCatalog,
    /// The catalog has products but none pass the criteria
    NoMatches,
    /// Matching products, in catalog order
    Matches(Vec<Product>),
}

impl CatalogView {
    /// Number of visible products
    pub fn len(&self) -> usize {
        self.products().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products().is_empty()
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Self::Matches(products) => products,
            Self::EmptyCatalog | Self::NoMatches => &[],
        }
    }

    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Matches(products) => products,
            Self::EmptyCatalog | Self::NoMatches => Vec::new(),
        }
    }
}

/// Owns the catalog, the criteria and the pipeline for one caller.
pub struct CatalogSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    pipeline: FilterPipeline,
}

impl CatalogSession {
    /// Start a session over `catalog` with identity criteria.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_pipeline(catalog, FilterPipeline::standard())
    }

    pub fn with_pipeline(catalog: Catalog, pipeline: FilterPipeline) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            pipeline,
        }
    }

    /// Replace the catalog wholesale.
    ///
    /// Criteria are left alone; a selected type that no longer exists simply
    /// matches nothing until the caller changes it.
    pub fn reload(&mut self, catalog: Catalog) {
        info!(
            "Catalog reloaded: {} -> {} products",
            self.catalog.len(),
            catalog.len()
        );
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_type(&mut self, selector: Selector) {
        debug!("Type selector set to {}", selector);
        self.criteria.set_type(selector);
    }

    pub fn set_gender(&mut self, selector: Selector) {
        debug!("Gender selector set to {}", selector);
        self.criteria.set_gender(selector);
    }

    pub fn set_search(&mut self, text: &str) {
        self.criteria.set_search(text);
        debug!("Search set to {:?}", self.criteria.search());
    }

    /// Back to the identity filter
    pub fn reset(&mut self) {
        debug!("Criteria reset");
        self.criteria.reset();
    }

    /// Selectable types for the current catalog
    pub fn type_facets(&self) -> Vec<String> {
        derive_type_facets(self.catalog.products())
    }

    /// Gender labels present in the current catalog
    pub fn gender_facets(&self) -> Vec<String> {
        derive_gender_facets(self.catalog.products())
    }

    /// Recompute the visible subset.
    pub fn view(&self) -> CatalogView {
        if self.catalog.is_empty() {
            return CatalogView::EmptyCatalog;
        }

        let matches = self.pipeline.apply(self.catalog.products(), &self.criteria);
        if matches.is_empty() {
            CatalogView::NoMatches
        } else {
            CatalogView::Matches(matches)
        }
    }
}
