use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shape documented for `POST /api/payment`. The handler reads the body as
/// raw JSON and hands `amount` to the processor untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentRequest {
    /// Smallest currency unit (cents).
    #[schema(example = 1999)]
    pub amount: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
