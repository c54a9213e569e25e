// Tiered weight-based pricing for shipment legs

use crate::models::{Cost, Weight};

/// A weight bracket with its cost per unit of distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostTier {
    /// Inclusive upper bound of the bracket; the catch-all tier uses infinity
    pub max_weight: Weight,

    /// Cost per unit distance for shipments within the bracket
    pub rate: Cost,
}

impl CostTier {
    /// Creates a new tier with the given bound and rate
    pub fn new(max_weight: Weight, rate: Cost) -> Self {
        Self { max_weight, rate }
    }
}

/// Ordered tier table mapping a shipment weight to a cost rate
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    /// Tiers in ascending order of maximum weight
    pub tiers: Vec<CostTier>,
}

impl Tariff {
    /// Creates a tariff from tiers ordered ascending by maximum weight
    pub fn new(tiers: Vec<CostTier>) -> Self {
        Self { tiers }
    }

    /// Resolves the cost rate for a shipment of the given weight.
    ///
    /// Returns the rate of the first tier whose bound covers the weight.
    /// The last tier is unbounded, so every non-negative weight resolves,
    /// including zero for empty repositioning legs.
    pub fn rate_for(&self, weight: Weight) -> Cost {
        for tier in &self.tiers {
            if weight <= tier.max_weight {
                return tier.rate;
            }
        }

        self.tiers.last().map(|tier| tier.rate).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tariff() -> Tariff {
        Tariff::new(vec![
            CostTier::new(5.0, 10.0),
            CostTier::new(f64::INFINITY, 8.0),
        ])
    }

    #[test]
    fn test_rate_for_tier_boundaries() {
        let tariff = create_test_tariff();

        assert_eq!(tariff.rate_for(3.0), 10.0);
        assert_eq!(tariff.rate_for(5.0), 10.0);
        assert_eq!(tariff.rate_for(5.1), 8.0);
        assert_eq!(tariff.rate_for(1000.0), 8.0);
    }

    #[test]
    fn test_zero_weight_resolves_to_first_tier() {
        let tariff = create_test_tariff();
        assert_eq!(tariff.rate_for(0.0), 10.0);
    }

    #[test]
    fn test_rate_is_non_increasing_in_weight() {
        let tariff = create_test_tariff();
        let mut previous = tariff.rate_for(0.0);

        for step in 1..100 {
            let rate = tariff.rate_for(step as f64 * 0.5);
            assert!(rate <= previous);
            previous = rate;
        }
    }
}
