//! The FilterPipeline combines filter dimensions.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern. A product is kept only if
//! every filter in the pipeline accepts it.

use crate::criteria::FilterCriteria;
use crate::filters::{GenderFilter, SearchFilter, TypeFilter};
use crate::traits::Filter;
use catalog_loader::Product;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TypeFilter)
///     .add_filter(GenderFilter)
///     .add_filter(SearchFilter);
///
/// let visible = pipeline.apply(catalog.products(), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    ///
    /// An empty pipeline passes every product through.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The type, gender and search filters, in that order.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TypeFilter)
            .add_filter(GenderFilter)
            .add_filter(SearchFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters to the catalog.
    ///
    /// ## Algorithm
    /// 1. Start with a copy of the catalog
    /// 2. For each filter in order, retain the products it accepts
    /// 3. Return what is left
    ///
    /// `retain` keeps relative order, so the result is always in catalog
    /// order. Since every filter is a pure predicate, the outcome equals
    /// the AND of all filters regardless of the order they run in.
    pub fn apply(&self, catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
        let mut current = catalog.to_vec();
        for filter in &self.filters {
            let input_count = current.len();
            current.retain(|product| filter.matches(product, criteria));
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Filter `catalog` with the standard pipeline.
pub fn apply(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    FilterPipeline::standard().apply(catalog, criteria)
}
