// Center model representing fixed supply locations

use crate::models::{CenterId, Product, Weight};

/// Represents a supply center stocking a fixed list of products
#[derive(Debug, Clone)]
pub struct Center {
    /// Unique identifier for the center
    pub id: CenterId,

    /// Products available at this center, in catalog order
    pub products: Vec<Product>,
}

impl Center {
    /// Creates a new center with the given ID and product list
    pub fn new<S: Into<CenterId>>(id: S, products: Vec<Product>) -> Self {
        Self {
            id: id.into(),
            products,
        }
    }

    /// Checks if the center supplies a specific product
    pub fn has_product(&self, name: &str) -> bool {
        self.products.iter().any(|product| product.name == name)
    }

    /// Gets the unit weight of a product if the center supplies it
    pub fn unit_weight(&self, name: &str) -> Option<Weight> {
        self.products
            .iter()
            .find(|product| product.name == name)
            .map(|product| product.unit_weight)
    }
}
