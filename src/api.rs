// HTTP boundary for the delivery cost engine

use crate::engine::planner::DeliveryPlanner;
use crate::models::{Cost, Order};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

/// Shared server state: the planner over the immutable network
pub struct AppState {
    pub planner: DeliveryPlanner,
}

/// Response body of the cost endpoint
#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub cost: Cost,
}

/// Builds the API router
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calculate-delivery-cost", post(calculate_delivery_cost))
        .with_state(state)
}

/// Computes the minimum delivery cost for the posted order.
///
/// The body is a flat JSON object mapping product ids to quantities;
/// malformed bodies are rejected by the `Json` extractor before reaching
/// the engine.
async fn calculate_delivery_cost(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> Json<CostResponse> {
    let cost = state.planner.minimum_cost(&order);
    Json(CostResponse { cost })
}
