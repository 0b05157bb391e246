//! # Catalog State
//!
//! Read-only product list behind the browse and detail screens.
//!
//! The catalog is seeded in memory at startup; there is no product database.

use storefront_core::validation::validate_search_query;
use storefront_core::{CoreError, CoreResult, Product};

/// Products available to browse, in display order.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        CatalogState { products }
    }

    /// The storefront's launch assortment.
    pub fn seeded() -> Self {
        CatalogState::new(vec![
            product(
                "organic-bananas",
                "Organic Bananas",
                "Fresh Fields",
                "1.99",
                "https://images.pexels.com/photos/2872755/pexels-photo-2872755.jpeg?auto=compress&cs=tinysrgb&w=400",
            ),
            product(
                "sourdough-bread",
                "Sourdough Bread",
                "Fresh Fields",
                "4.50",
                "https://images.pexels.com/photos/209206/pexels-photo-209206.jpeg?auto=compress&cs=tinysrgb&w=400",
            ),
            product(
                "fresh-produce",
                "Fresh Produce",
                "Fresh Fields",
                "3.25",
                "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg?auto=compress&cs=tinysrgb&w=400",
            ),
            product(
                "strawberries-1",
                "Organic Strawberries",
                "Fresh Fields",
                "4.99",
                "https://images.unsplash.com/photo-1543528176-61b239494933?w=400",
            ),
            product(
                "eggs-1",
                "Organic Eggs",
                "Farm Fresh",
                "5.50",
                "https://images.unsplash.com/photo-1582722872445-44dc5f7e3c8f?w=400",
            ),
            product(
                "milk-1",
                "Whole Milk",
                "Dairy Best",
                "3.99",
                "https://images.unsplash.com/photo-1563636619-e9143da7973b?w=400",
            ),
        ])
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Case-insensitive search over name and brand. An empty query
    /// returns everything.
    pub fn search(&self, query: &str) -> CoreResult<Vec<Product>> {
        let needle = validate_search_query(query)?;
        Ok(self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .cloned()
            .collect())
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::seeded()
    }
}

fn product(id: &str, name: &str, brand: &str, price: &str, image: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        price: price.to_string(),
        image: image.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::validation::validate_add_payload;

    #[test]
    fn test_seeded_products_are_valid_cart_payloads() {
        let catalog = CatalogState::seeded();
        assert_eq!(catalog.all().len(), 6);
        for product in catalog.all() {
            validate_add_payload(&product.to_cart_payload()).unwrap();
        }
    }

    #[test]
    fn test_get() {
        let catalog = CatalogState::seeded();
        assert_eq!(catalog.get("milk-1").unwrap().price, "3.99");
        assert!(matches!(
            catalog.get("caviar"),
            Err(CoreError::ProductNotFound(id)) if id == "caviar"
        ));
    }

    #[test]
    fn test_search() {
        let catalog = CatalogState::seeded();

        let organic: Vec<String> = catalog
            .search("ORGANIC")
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(organic, ["organic-bananas", "strawberries-1", "eggs-1"]);

        assert_eq!(catalog.search("dairy").unwrap().len(), 1);
        assert_eq!(catalog.search("  ").unwrap().len(), 6);
        assert!(catalog.search("caviar").unwrap().is_empty());
        assert!(matches!(
            catalog.search(&"x".repeat(200)),
            Err(CoreError::Validation(_))
        ));
    }
}
