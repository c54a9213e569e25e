// Builds the compiled-in delivery network the service ships with

use crate::models::{Center, CostTier, Network, NetworkError, Product, Tariff};
use std::collections::HashMap;

/// Hub node id used by the built-in network
pub const HUB_ID: &str = "L1";

/// Assembles the built-in catalog: three supply centers around a single
/// hub, with a two-tier weight tariff. Validation happens in
/// [`Network::new`], so a broken catalog is caught before the server
/// accepts any order.
pub fn default_network() -> Result<Network, NetworkError> {
    let centers = vec![
        Center::new(
            "C1",
            vec![
                Product::new("A", 3.0),
                Product::new("B", 2.0),
                Product::new("C", 8.0),
            ],
        ),
        Center::new(
            "C2",
            vec![
                Product::new("D", 12.0),
                Product::new("E", 25.0),
                Product::new("F", 15.0),
            ],
        ),
        Center::new(
            "C3",
            vec![
                Product::new("G", 0.5),
                Product::new("H", 1.0),
                Product::new("I", 2.0),
            ],
        ),
    ];

    // Distances are stored in both directions
    let mut distances = HashMap::new();
    for (center_id, distance) in [("C1", 4.0), ("C2", 2.5), ("C3", 2.0)] {
        distances.insert((center_id.to_owned(), HUB_ID.to_owned()), distance);
        distances.insert((HUB_ID.to_owned(), center_id.to_owned()), distance);
    }

    let tariff = Tariff::new(vec![
        CostTier::new(5.0, 10.0),
        CostTier::new(f64::INFINITY, 8.0),
    ]);

    Network::new(HUB_ID, centers, distances, tariff)
}
