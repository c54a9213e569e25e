// Network model: the static catalog of centers, distances, and pricing

use crate::models::{Center, CenterId, Distance, Order, ProductId, Tariff};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors detected while assembling the delivery network at startup
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("product {product} is listed under both {first} and {second}")]
    DuplicateProduct {
        product: ProductId,
        first: CenterId,
        second: CenterId,
    },

    #[error("no distance entry from {from} to {to}")]
    MissingDistance { from: CenterId, to: CenterId },

    #[error("distance between {a} and {b} differs by direction")]
    AsymmetricDistance { a: CenterId, b: CenterId },

    #[error("negative distance from {from} to {to}")]
    NegativeDistance { from: CenterId, to: CenterId },

    #[error("tariff has no tiers")]
    EmptyTariff,

    #[error("tariff tiers are not ascending at index {index}")]
    UnsortedTiers { index: usize },

    #[error("last tariff tier must be unbounded")]
    BoundedLastTier,
}

/// Immutable delivery network: the supply centers, the hub they consolidate
/// through, the distance table, and the tariff, plus the product-to-center
/// index derived from the catalog.
///
/// Built once at startup and never mutated; the engine borrows it.
#[derive(Debug, Clone)]
pub struct Network {
    hub: CenterId,
    centers: HashMap<CenterId, Center>,
    distances: HashMap<(CenterId, CenterId), Distance>,
    tariff: Tariff,
    product_index: HashMap<ProductId, CenterId>,
}

impl Network {
    /// Assembles and validates a network.
    ///
    /// Every invariant the engine relies on is checked here, so lookups at
    /// request time cannot hit a misconfigured catalog: each product maps
    /// to exactly one center, every center has a symmetric non-negative
    /// distance to the hub in both directions, and the tariff covers all of
    /// `[0, inf)` in ascending order.
    pub fn new(
        hub: impl Into<CenterId>,
        centers: Vec<Center>,
        distances: HashMap<(CenterId, CenterId), Distance>,
        tariff: Tariff,
    ) -> Result<Self, NetworkError> {
        let hub = hub.into();

        validate_tariff(&tariff)?;

        let mut product_index: HashMap<ProductId, CenterId> = HashMap::new();
        for center in &centers {
            for product in &center.products {
                if let Some(first) = product_index.insert(product.name.clone(), center.id.clone())
                {
                    return Err(NetworkError::DuplicateProduct {
                        product: product.name.clone(),
                        first,
                        second: center.id.clone(),
                    });
                }
            }
        }

        for center in &centers {
            validate_hub_link(&distances, &center.id, &hub)?;
        }

        let centers = centers
            .into_iter()
            .map(|center| (center.id.clone(), center))
            .collect();

        Ok(Self {
            hub,
            centers,
            distances,
            tariff,
            product_index,
        })
    }

    /// Identifier of the consolidation hub
    pub fn hub(&self) -> &str {
        &self.hub
    }

    /// Looks up a center by its identifier
    pub fn center(&self, id: &str) -> Option<&Center> {
        self.centers.get(id)
    }

    /// The tariff table shared by every leg
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Distance between two nodes. Missing pairs resolve to infinity so a
    /// pair that escaped validation can never win a minimum-cost search.
    pub fn distance(&self, from: &str, to: &str) -> Distance {
        self.distances
            .get(&(from.to_owned(), to.to_owned()))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// The unique center supplying a product, if the catalog lists it
    pub fn supplier_of(&self, product: &str) -> Option<&CenterId> {
        self.product_index.get(product)
    }

    /// Distinct centers supplying any positively requested product, sorted
    /// for a deterministic evaluation order.
    pub fn centers_needed(&self, order: &Order) -> Vec<CenterId> {
        let mut needed: HashSet<&CenterId> = HashSet::new();

        for (product, &quantity) in &order.items {
            if quantity > 0.0 {
                if let Some(center_id) = self.product_index.get(product) {
                    needed.insert(center_id);
                }
            }
        }

        let mut needed: Vec<CenterId> = needed.into_iter().cloned().collect();
        needed.sort();
        needed
    }
}

/// Checks that a center is connected to the hub in both directions with the
/// same non-negative distance.
fn validate_hub_link(
    distances: &HashMap<(CenterId, CenterId), Distance>,
    center_id: &CenterId,
    hub: &CenterId,
) -> Result<(), NetworkError> {
    let outbound = *distances.get(&(center_id.clone(), hub.clone())).ok_or_else(|| {
        NetworkError::MissingDistance {
            from: center_id.clone(),
            to: hub.clone(),
        }
    })?;

    let inbound = *distances.get(&(hub.clone(), center_id.clone())).ok_or_else(|| {
        NetworkError::MissingDistance {
            from: hub.clone(),
            to: center_id.clone(),
        }
    })?;

    if outbound < 0.0 {
        return Err(NetworkError::NegativeDistance {
            from: center_id.clone(),
            to: hub.clone(),
        });
    }
    if inbound < 0.0 {
        return Err(NetworkError::NegativeDistance {
            from: hub.clone(),
            to: center_id.clone(),
        });
    }

    if outbound != inbound {
        return Err(NetworkError::AsymmetricDistance {
            a: center_id.clone(),
            b: hub.clone(),
        });
    }

    Ok(())
}

fn validate_tariff(tariff: &Tariff) -> Result<(), NetworkError> {
    if tariff.tiers.is_empty() {
        return Err(NetworkError::EmptyTariff);
    }

    for (index, pair) in tariff.tiers.windows(2).enumerate() {
        if pair[1].max_weight <= pair[0].max_weight {
            return Err(NetworkError::UnsortedTiers { index: index + 1 });
        }
    }

    match tariff.tiers.last() {
        Some(last) if last.max_weight.is_finite() => Err(NetworkError::BoundedLastTier),
        _ => Ok(()),
    }
}
