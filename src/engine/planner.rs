// Minimum-cost route planning over the delivery network

use crate::engine::exhaustive::ExhaustivePermutations;
use crate::engine::RouteEnumerator;
use crate::models::{CenterId, Cost, DeliveryRoute, Network, Order};
use rayon::prelude::*;
use tracing::debug;

/// Computes the cheapest way to serve an order: determine which centers are
/// needed, enumerate candidate visiting orders, replay the pickups along
/// each candidate, and keep the minimum total.
///
/// Stateless across calls; every route evaluation works on its own copy of
/// the order quantities, so candidates never interfere and concurrent calls
/// behind a shared reference are safe.
pub struct DeliveryPlanner {
    network: Network,
    enumerator: Box<dyn RouteEnumerator + Send + Sync>,
}

impl DeliveryPlanner {
    /// Creates a planner with exhaustive route enumeration
    pub fn new(network: Network) -> Self {
        Self::with_enumerator(network, Box::new(ExhaustivePermutations::default()))
    }

    /// Creates a planner with a custom enumeration strategy
    pub fn with_enumerator(
        network: Network,
        enumerator: Box<dyn RouteEnumerator + Send + Sync>,
    ) -> Self {
        Self {
            network,
            enumerator,
        }
    }

    /// The network this planner serves
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Cost of one loaded leg from a center back to the hub.
    ///
    /// Consumes the center's share of the remaining quantities. A center
    /// that contributes nothing incurs no charge, which covers centers
    /// already emptied by an earlier leg of the same route.
    fn loaded_leg_cost(&self, center_id: &str, remaining: &mut Order) -> Cost {
        let center = match self.network.center(center_id) {
            Some(center) => center,
            None => return 0.0,
        };

        let weight = remaining.consume_available(center);
        if weight == 0.0 {
            return 0.0;
        }

        let distance = self.network.distance(center_id, self.network.hub());
        distance * self.network.tariff().rate_for(weight)
    }

    /// Cost of repositioning an empty vehicle from the hub out to a center,
    /// always charged at the minimum-weight rate.
    fn empty_leg_cost(&self, center_id: &str) -> Cost {
        let distance = self.network.distance(self.network.hub(), center_id);
        distance * self.network.tariff().rate_for(0.0)
    }

    /// Total cost of serving the order along one visiting order.
    ///
    /// Works on a private copy of the quantities so candidate routes stay
    /// independent of each other.
    fn route_cost(&self, route: &[CenterId], order: &Order) -> Cost {
        let mut remaining = order.clone();
        let mut cost = 0.0;

        for (i, center_id) in route.iter().enumerate() {
            // The first center is a direct pickup; every later center needs
            // an empty repositioning leg from the hub first.
            if i > 0 {
                cost += self.empty_leg_cost(center_id);
            }
            cost += self.loaded_leg_cost(center_id, &mut remaining);
        }

        cost
    }

    /// The cheapest visiting order for the order, or `None` when no center
    /// carries any requested product.
    pub fn best_route(&self, order: &Order) -> Option<DeliveryRoute> {
        let centers = self.network.centers_needed(order);
        if centers.is_empty() {
            return None;
        }

        let candidates = self.enumerator.routes(&self.network, &centers);
        debug!(
            "evaluating {} candidate routes over {} centers",
            candidates.len(),
            centers.len()
        );

        candidates
            .into_par_iter()
            .map(|route| {
                let cost = self.route_cost(&route, order);
                DeliveryRoute::new(route, cost)
            })
            .min_by(|a, b| a.cmp_by_cost(b))
    }

    /// Minimum total shipping cost for the order; zero when nothing in the
    /// order maps to a center. The caller's order is never mutated.
    pub fn minimum_cost(&self, order: &Order) -> Cost {
        self.best_route(order).map(|route| route.cost).unwrap_or(0.0)
    }
}
