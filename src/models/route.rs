// Route model for costed delivery routes

use crate::models::{CenterId, Cost};
use std::cmp::Ordering;

/// A visiting order of supply centers together with its total shipping cost
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRoute {
    /// Sequence of centers to visit
    pub centers: Vec<CenterId>,

    /// Total cost of serving the order along this sequence
    pub cost: Cost,
}

impl DeliveryRoute {
    /// Creates a new costed route
    pub fn new(centers: Vec<CenterId>, cost: Cost) -> Self {
        Self { centers, cost }
    }

    /// Compares routes by total cost, for minimum search over float totals
    pub fn cmp_by_cost(&self, other: &Self) -> Ordering {
        self.cost.partial_cmp(&other.cost).unwrap_or(Ordering::Equal)
    }
}
