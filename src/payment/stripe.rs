use async_trait::async_trait;
use serde::Deserialize;

use super::{GatewayError, PaymentGateway, PaymentIntent};

pub const STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Deserialize)]
struct IntentBody {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Stripe payment intents over the REST API (form-encoded requests).
#[derive(Clone)]
pub struct StripeGateway {
    http: reqwest::Client,
    secret_key: Option<String>,
    api_base: String,
}

impl StripeGateway {
    pub fn new(secret_key: Option<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.filter(|key| !key.is_empty()),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount: Option<&str>,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let mut params: Vec<(&str, String)> = Vec::with_capacity(2);
        if let Some(amount) = amount {
            params.push(("amount", amount.to_string()));
        }
        params.push(("currency", currency.to_string()));

        let url = format!("{}/v1/payment_intents", self.api_base);
        tracing::debug!(%url, ?amount, currency, "creating payment intent");

        let response = self
            .http
            .post(&url)
            .bearer_auth(secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => None,
            }
            .unwrap_or_else(|| format!("payment gateway returned {status}"));
            tracing::warn!(status = status.as_u16(), %message, "payment intent rejected");
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntentBody = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        let client_secret = body.client_secret.ok_or_else(|| {
            GatewayError::MalformedResponse("missing client_secret".to_string())
        })?;

        Ok(PaymentIntent {
            id: body.id,
            client_secret,
        })
    }
}
