pub mod exhaustive;
pub mod planner;

// Common engine traits
use crate::models::{CenterId, Network};

/// Strategy for producing candidate visiting orders over the centers an
/// order requires.
///
/// Swappable at the planner seam, so a pruned or heuristic search can
/// replace exhaustive enumeration without touching the cost model.
pub trait RouteEnumerator {
    /// Candidate visiting orders for the given centers.
    ///
    /// An empty center set must yield no routes; otherwise every candidate
    /// is a total ordering of the input, each center appearing exactly once.
    fn routes(&self, network: &Network, centers: &[CenterId]) -> Vec<Vec<CenterId>>;
}
