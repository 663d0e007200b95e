use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    dto::orders::OrderInput,
    error::{AppResult, ErrorBody},
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/{user_id}", get(list_orders_for_user))
}

#[utoipa::path(
    get,
    path = "/api/orders/{user_id}",
    params(
        ("user_id" = String, Path, description = "User id the orders reference")
    ),
    responses(
        (status = 200, description = "Orders of the user, empty when none match", body = Vec<Order>),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn list_orders_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders_for_user(&state, &user_id).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderInput,
    responses(
        (status = 201, description = "Created order", body = Order),
        (status = 400, description = "Body rejected by the schema", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(payload) = payload?;
    let order = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
