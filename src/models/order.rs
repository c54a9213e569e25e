// Order model representing a customer request for products

use crate::models::{Center, ProductId, Quantity, Weight};
use serde::Deserialize;
use std::collections::HashMap;

/// A customer's order: product identifiers mapped to requested quantities.
///
/// Entries with non-positive quantities are treated as absent. Deserializes
/// transparently from the flat JSON object the delivery API receives, so
/// unknown product keys arrive here and are simply never matched by any
/// center.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Order {
    /// Map of product identifiers to requested quantities
    pub items: HashMap<ProductId, Quantity>,
}

impl Order {
    /// Creates a new empty order
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Adds the given quantity of a product; non-positive quantities are ignored
    pub fn add_item<S: Into<ProductId>>(&mut self, product: S, quantity: Quantity) {
        if quantity > 0.0 {
            *self.items.entry(product.into()).or_insert(0.0) += quantity;
        }
    }

    /// Requested quantity of a product, zero when absent or non-positive
    pub fn requested(&self, product: &str) -> Quantity {
        match self.items.get(product) {
            Some(&quantity) if quantity > 0.0 => quantity,
            _ => 0.0,
        }
    }

    /// Checks if any product still has a positive requested quantity
    pub fn has_demand(&self) -> bool {
        self.items.values().any(|&quantity| quantity > 0.0)
    }

    /// Accumulates the weight of every requested product this center
    /// supplies and zeroes those quantities, so a product is billed at most
    /// once across a whole route evaluation.
    pub fn consume_available(&mut self, center: &Center) -> Weight {
        let mut total_weight = 0.0;

        for product in &center.products {
            let quantity = self.requested(&product.name);
            if quantity > 0.0 {
                total_weight += product.unit_weight * quantity;
                self.items.insert(product.name.clone(), 0.0);
            }
        }

        total_weight
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
