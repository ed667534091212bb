//! Core domain types for the product catalog.
//!
//! A catalog is an ordered list of connector products. Order is the order
//! the rows appeared in the source text and is never changed afterwards.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry.
///
/// All text fields are stored trimmed. Products are immutable once built;
/// a reload replaces the whole catalog rather than editing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display title and the only field searched by free text
    pub name: String,
    /// External link, opaque to the catalog (may be empty)
    pub url: String,
    /// Free-form connector type label, e.g. "USB-A" or "Type-C"
    #[serde(rename = "type")]
    pub connector_type: String,
    /// Connector gender label, e.g. "Male" or "Female"
    pub gender: String,
    /// Image reference
    ///
    /// `None` means the product has no image and a renderer should show a
    /// placeholder. An empty string is never stored here.
    #[serde(rename = "imageId")]
    pub image_id: Option<String>,
}

impl Product {
    /// Build a product from already-split fields, trimming each one.
    ///
    /// A blank image reference becomes `None`.
    pub fn from_fields(
        name: &str,
        url: &str,
        connector_type: &str,
        gender: &str,
        image_id: Option<&str>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            url: url.trim().to_string(),
            connector_type: connector_type.trim().to_string(),
            gender: gender.trim().to_string(),
            image_id: image_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }

    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.image_id.is_some()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full ordered set of products for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-ordered list of products
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in input order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::from_products(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_trims_everything() {
        let product = Product::from_fields(" USB-C Cable ", " https://x ", " Type-C", "Male ", Some(" 101 "));

        assert_eq!(product.name, "USB-C Cable");
        assert_eq!(product.url, "https://x");
        assert_eq!(product.connector_type, "Type-C");
        assert_eq!(product.gender, "Male");
        assert_eq!(product.image_id(), Some("101"));
    }

    #[test]
    fn test_blank_image_is_no_image() {
        let missing = Product::from_fields("a", "b", "c", "d", None);
        let blank = Product::from_fields("a", "b", "c", "d", Some("   "));

        assert!(!missing.has_image());
        assert!(!blank.has_image());
        assert_eq!(blank.image_id, None);
    }

    #[test]
    fn test_serde_field_names() {
        let product = Product::from_fields("Plug", "", "HDMI", "Female", None);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["type"], "HDMI");
        assert!(json["imageId"].is_null());
        assert_eq!(json["url"], "");
    }

    #[test]
    fn test_catalog_accessors() {
        let catalog = Catalog::from_products(vec![
            Product::from_fields("first", "", "USB-A", "Male", None),
            Product::from_fields("second", "", "USB-B", "Female", Some("7")),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(1).map(|p| p.name.as_str()), Some("second"));
        assert!(catalog.get(2).is_none());
        assert!(Catalog::new().is_empty());
    }
}
