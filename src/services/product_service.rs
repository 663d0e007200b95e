use chrono::Utc;
use serde_json::Value;

use crate::{error::AppResult, models::Product, state::AppState};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let products = state.store.list_products().await?;
    tracing::debug!(count = products.len(), "listed products");
    Ok(products)
}

pub async fn create_product(state: &AppState, payload: Value) -> AppResult<Product> {
    let product = Product::from_json(&payload, Utc::now())?;
    let product = state.store.insert_product(product).await?;
    tracing::info!(product_id = %product.id, "product created");
    Ok(product)
}
