use serde_json::Value;

use crate::{
    dto::payment::PaymentResponse, error::AppResult, payment::form_amount, state::AppState,
};

pub const CURRENCY: &str = "usd";

/// Whatever the body holds under `amount` goes to the gateway; a body that
/// is not an object simply has no amount.
pub async fn create_payment_intent(state: &AppState, payload: Value) -> AppResult<PaymentResponse> {
    let amount = form_amount(&payload);
    let intent = state
        .gateway
        .create_payment_intent(amount.as_deref(), CURRENCY)
        .await?;
    tracing::info!(payment_intent = %intent.id, "payment intent created");
    Ok(PaymentResponse {
        client_secret: intent.client_secret,
    })
}
