// Product model representing catalog items with a shipping weight

use crate::models::{ProductId, Weight};

/// Represents a product that a supply center can ship
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog identifier of the product
    pub name: ProductId,

    /// Shipping weight of a single unit
    pub unit_weight: Weight,
}

impl Product {
    /// Creates a new product with the given name and unit weight
    pub fn new<S: Into<ProductId>>(name: S, unit_weight: Weight) -> Self {
        Self {
            name: name.into(),
            unit_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("A", 3.0);
        assert_eq!(product.name, "A");
        assert_eq!(product.unit_weight, 3.0);
    }
}
