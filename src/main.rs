use hub_delivery::api::{self, AppState};
use hub_delivery::utils::init_network::default_network;
use hub_delivery::DeliveryPlanner;
use std::sync::Arc;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let network = match default_network() {
        Ok(network) => network,
        Err(e) => {
            error!("built-in delivery network is invalid: {}", e);
            return;
        }
    };

    let state = Arc::new(AppState {
        planner: DeliveryPlanner::new(network),
    });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();

    info!("delivery cost API listening on port {}", port);

    axum::serve(listener, api::app(state)).await.unwrap();
}
