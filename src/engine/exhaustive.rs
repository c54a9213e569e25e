// Route enumeration strategies: exhaustive permutations and a greedy fallback

use crate::engine::RouteEnumerator;
use crate::models::{CenterId, Network};
use std::cmp::Ordering;
use tracing::warn;

/// Enumerates every permutation of the required centers.
///
/// The search is factorial in the center count, so beyond `max_centers` it
/// degrades to the nearest-first ordering instead of exploding.
#[derive(Debug, Clone)]
pub struct ExhaustivePermutations {
    /// Largest center set that is still enumerated exhaustively
    pub max_centers: usize,
}

impl Default for ExhaustivePermutations {
    fn default() -> Self {
        Self { max_centers: 8 }
    }
}

impl RouteEnumerator for ExhaustivePermutations {
    fn routes(&self, network: &Network, centers: &[CenterId]) -> Vec<Vec<CenterId>> {
        if centers.is_empty() {
            return Vec::new();
        }

        if centers.len() > self.max_centers {
            warn!(
                "{} centers exceed the exhaustive limit of {}, falling back to nearest-first",
                centers.len(),
                self.max_centers
            );
            return vec![nearest_first_order(network, centers)];
        }

        permutations(centers.to_vec())
    }
}

/// Generate all permutations of a vector of center ids
fn permutations(centers: Vec<CenterId>) -> Vec<Vec<CenterId>> {
    if centers.is_empty() {
        return vec![vec![]];
    }

    let mut result = Vec::new();

    for (i, center) in centers.iter().enumerate() {
        let mut remaining = centers.clone();
        remaining.remove(i);

        for mut perm in permutations(remaining) {
            perm.insert(0, center.clone());
            result.push(perm);
        }
    }

    result
}

/// Greedy strategy visiting centers in ascending hub distance.
///
/// Produces a single candidate, linear in the center count. Not guaranteed
/// to find the minimum; useful when the center set is too large for the
/// exhaustive search.
#[derive(Debug, Clone, Default)]
pub struct NearestFirst;

impl RouteEnumerator for NearestFirst {
    fn routes(&self, network: &Network, centers: &[CenterId]) -> Vec<Vec<CenterId>> {
        if centers.is_empty() {
            return Vec::new();
        }

        vec![nearest_first_order(network, centers)]
    }
}

/// Orders centers by their distance from the hub, closest first
fn nearest_first_order(network: &Network, centers: &[CenterId]) -> Vec<CenterId> {
    let mut ordered = centers.to_vec();

    ordered.sort_by(|a, b| {
        network
            .distance(network.hub(), a)
            .partial_cmp(&network.distance(network.hub(), b))
            .unwrap_or(Ordering::Equal)
    });

    ordered
}
