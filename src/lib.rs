// Public modules
pub mod api;
pub mod engine;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use engine::exhaustive::{ExhaustivePermutations, NearestFirst};
pub use engine::planner::DeliveryPlanner;
pub use engine::RouteEnumerator;
pub use models::{Center, CostTier, DeliveryRoute, Network, Order, Product, Tariff};
