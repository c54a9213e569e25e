// HTTP boundary tests for the cost endpoint

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use hub_delivery::api::{app, AppState};
use hub_delivery::utils::init_network::default_network;
use hub_delivery::DeliveryPlanner;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> axum::Router {
    let network = default_network().expect("built-in network must validate");
    app(Arc::new(AppState {
        planner: DeliveryPlanner::new(network),
    }))
}

async fn post_order(body: &str) -> (StatusCode, serde_json::Value) {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate-delivery-cost")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .expect("request must build"),
        )
        .await
        .expect("handler must respond");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_single_product_order() {
    let (status, json) = post_order(r#"{"A": 1}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cost"], 40.0);
}

#[tokio::test]
async fn test_multi_center_order() {
    let (status, json) = post_order(r#"{"A": 1, "D": 1}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cost"], 85.0);
}

#[tokio::test]
async fn test_unknown_product_order() {
    let (status, json) = post_order(r#"{"Z": 5}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cost"], 0.0);
}

#[tokio::test]
async fn test_empty_order() {
    let (status, json) = post_order("{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cost"], 0.0);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let (status, _) = post_order("not an order").await;

    assert!(status.is_client_error());
}
