use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde_json::Value;

use crate::{
    dto::payment::{PaymentRequest, PaymentResponse},
    error::{AppResult, ErrorBody},
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_payment_intent))
}

#[utoipa::path(
    post,
    path = "/api/payment",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentResponse),
        (status = 500, description = "Payment gateway failure", body = ErrorBody)
    ),
    tag = "Payment"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PaymentResponse>> {
    let Json(payload) = payload?;
    let response = payment_service::create_payment_intent(&state, payload).await?;
    Ok(Json(response))
}
