//! Free-text search over product names.
//!
//! The pattern in FilterCriteria is already lower-cased, so only the
//! product name needs folding here.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog_loader::Product;

/// Keeps products whose name contains the search text, ignoring case.
///
/// Only `name` is searched; type, gender and url are not.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, product: &Product, criteria: &FilterCriteria) -> bool {
        let pattern = criteria.search();
        pattern.is_empty() || product.name.to_lowercase().contains(pattern)
    }
}
