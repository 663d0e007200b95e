//! Remote payment processor.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod stripe;

pub use stripe::StripeGateway;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway credential is not configured")]
    MissingCredential,

    #[error("payment gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected payment gateway response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Form value for the `amount` field of a payment request body.
///
/// Strings are sent untouched and numbers or booleans in their JSON text.
/// Arrays and objects go out as compact JSON, which the processor refuses.
/// Returns `None` when the body has no `amount`, or is not an object at all.
pub fn form_amount(body: &Value) -> Option<String> {
    match body.get("amount")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// One attempt, no idempotency key: a client retry after a timeout can
    /// create a second intent. `amount` is forwarded verbatim (or left out)
    /// and the processor decides whether it is valid.
    async fn create_payment_intent(
        &self,
        amount: Option<&str>,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError>;
}
