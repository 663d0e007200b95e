mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use shop_api::{models::DocumentId, store::UnavailableStore};

use common::{StubGateway, app_with, get, memory_app, post_json};

#[tokio::test]
async fn order_without_status_is_pending() {
    let app = memory_app();
    let user_id = DocumentId::generate();
    let product_id = DocumentId::generate();

    let (status, order) = post_json(
        &app.router,
        "/api/orders",
        &json!({
            "userId": user_id.to_string(),
            "items": [{ "productId": product_id.to_string(), "quantity": 2, "price": 100 }],
            "total": 1,
            "paymentId": "pi_123"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["userId"], user_id.to_string());
    assert_eq!(order["paymentId"], "pi_123");
    assert_eq!(order["items"][0]["productId"], product_id.to_string());
    assert_eq!(order["items"][0]["quantity"], 2);
    // total is stored as sent, not recomputed from the items
    assert_eq!(order["total"], 1.0);
}

#[tokio::test]
async fn explicit_status_is_kept() {
    let app = memory_app();
    let (status, order) = post_json(&app.router, "/api/orders", &json!({ "status": "paid" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "paid");
    assert_eq!(order["items"], json!([]));
}

#[tokio::test]
async fn listing_by_user_only_returns_that_users_orders() {
    let app = memory_app();
    let alice = DocumentId::generate();
    let bob = DocumentId::generate();

    for (user, total) in [(&alice, 10), (&bob, 20), (&alice, 30)] {
        let (status, _) = post_json(
            &app.router,
            "/api/orders",
            &json!({ "userId": user.to_string(), "total": total }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    // an order with no user must never match
    post_json(&app.router, "/api/orders", &json!({ "total": 99 })).await;

    let (status, orders) = get(&app.router, &format!("/api/orders/{alice}")).await;
    assert_eq!(status, StatusCode::OK);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o["userId"] == alice.to_string()));
    assert_eq!(orders[0]["total"], 10.0);
    assert_eq!(orders[1]["total"], 30.0);

    let stranger = DocumentId::generate();
    let (status, orders) = get(&app.router, &format!("/api/orders/{stranger}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn malformed_user_id_matches_nothing() {
    let app = memory_app();
    let (status, orders) = get(&app.router, "/api/orders/not-an-id").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn bad_reference_is_rejected() {
    let app = memory_app();
    let (status, body) = post_json(
        &app.router,
        "/api/orders",
        &json!({
            "userId": "nobody",
            "items": [{ "productId": 7, "quantity": "two" }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Order validation failed: "));
    assert!(message.contains("userId: Cast to ObjectId failed for value \"nobody\""));
    assert!(message.contains("items.0.productId: Cast to ObjectId failed for value 7"));
    assert!(message.contains("items.0.quantity: Cast to integer failed"));
    assert_eq!(app.store.order_count().await, 0);
}

#[tokio::test]
async fn store_failure_on_listing_is_500() {
    let router = app_with(
        Arc::new(UnavailableStore::new("no route to host")),
        Arc::new(StubGateway::default()),
    );
    let user = DocumentId::generate();
    let (status, body) = get(&router, &format!("/api/orders/{user}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("no route to host"));
}
