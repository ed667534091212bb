//! Core traits for the filter engine.
//!
//! This module defines the Filter trait that allows composable,
//! independent predicates to be evaluated against catalog products.

use crate::criteria::FilterCriteria;
use catalog_loader::Product;

/// Core trait for one filter dimension.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared between callers
/// - Filters are pure predicates over a product and the current criteria;
///   they hold no per-query state, so one pipeline serves every query
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Does `product` pass this filter under `criteria`?
    fn matches(&self, product: &Product, criteria: &FilterCriteria) -> bool;
}
