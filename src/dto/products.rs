use serde::Deserialize;
use utoipa::ToSchema;

/// Shape accepted by `POST /api/products`. Every field is optional; values
/// are coerced by [`crate::models::Product::from_json`].
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i64>,
    #[schema(default = 0)]
    pub rating: Option<f64>,
    pub reviews: Option<Vec<ReviewInput>>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewInput {
    pub user: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<f64>,
}
