//! Filter on the connector type label.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog_loader::Product;

/// Keeps products whose type equals the selected type exactly.
///
/// Passes everything when the type selector is "all".
pub struct TypeFilter;

impl Filter for TypeFilter {
    fn name(&self) -> &str {
        "TypeFilter"
    }

    fn matches(&self, product: &Product, criteria: &FilterCriteria) -> bool {
        criteria.connector_type.matches(&product.connector_type)
    }
}
