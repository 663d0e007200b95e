use serde::Deserialize;
use utoipa::ToSchema;

/// Shape accepted by `POST /api/orders`, coerced by
/// [`crate::models::Order::from_json`].
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[schema(example = "665f1c2ab7e4a1d2c3f40a11")]
    pub user_id: Option<String>,
    pub items: Option<Vec<OrderItemInput>>,
    /// Taken as given, not recomputed from `items`.
    pub total: Option<f64>,
    #[schema(default = "pending")]
    pub status: Option<String>,
    pub payment_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}
