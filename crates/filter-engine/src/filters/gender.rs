//! Filter on the connector gender label.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog_loader::Product;

/// Keeps products whose gender equals the selected gender exactly.
pub struct GenderFilter;

impl Filter for GenderFilter {
    fn name(&self) -> &str {
        "GenderFilter"
    }

    fn matches(&self, product: &Product, criteria: &FilterCriteria) -> bool {
        criteria.gender.matches(&product.gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Selector;
    use crate::filters::test_support::product;

    #[test]
    fn test_gender_filter() {
        let criteria = FilterCriteria::new().with_gender(Selector::exact("Female"));

        assert!(GenderFilter.matches(&product("socket", "USB-A", "Female"), &criteria));
        assert!(!GenderFilter.matches(&product("plug", "USB-A", "Male"), &criteria));
        assert!(!GenderFilter.matches(&product("odd", "USB-A", "female"), &criteria));
    }

    #[test]
    fn test_gender_filter_free_form_labels() {
        let criteria = FilterCriteria::new().with_gender(Selector::exact("Panel Mount"));
        assert!(GenderFilter.matches(&product("x", "1394", "Panel Mount"), &criteria));
    }
}
