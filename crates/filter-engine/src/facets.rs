//! Facet derivation: the distinct values a caller can select.
//!
//! Facets are derived from the catalog on demand and never stored, so a
//! reloaded catalog always yields fresh facets.

use catalog_loader::Product;
use std::collections::HashSet;

/// Distinct values of one field, in first-occurrence order.
pub fn derive_facets<'a, F>(catalog: &'a [Product], field: F) -> Vec<String>
where
    F: Fn(&'a Product) -> &'a str,
{
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Distinct connector types, in the order they first appear
pub fn derive_type_facets(catalog: &[Product]) -> Vec<String> {
    derive_facets(catalog, |p| p.connector_type.as_str())
}

/// Distinct gender labels, in the order they first appear
pub fn derive_gender_facets(catalog: &[Product]) -> Vec<String> {
    derive_facets(catalog, |p| p.gender.as_str())
}
