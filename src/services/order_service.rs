use chrono::Utc;
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{DocumentId, Order},
    state::AppState,
};

/// `user_id` is not validated: anything that is not a well-formed id just
/// matches no orders.
pub async fn list_orders_for_user(state: &AppState, user_id: &str) -> AppResult<Vec<Order>> {
    let Some(user_id) = DocumentId::parse(user_id) else {
        tracing::debug!(user_id, "malformed user id, no orders can match");
        return Ok(Vec::new());
    };
    let orders = state.store.orders_for_user(&user_id).await?;
    tracing::debug!(%user_id, count = orders.len(), "listed orders");
    Ok(orders)
}

pub async fn create_order(state: &AppState, payload: Value) -> AppResult<Order> {
    let order = Order::from_json(&payload, Utc::now())?;
    let order = state.store.insert_order(order).await?;
    tracing::info!(
        order_id = %order.id,
        user_id = ?order.user_id.map(|id| id.to_string()),
        status = %order.status,
        "order created"
    );
    Ok(order)
}
