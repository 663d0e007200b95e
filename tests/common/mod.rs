#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use shop_api::{
    app::build_router,
    payment::{GatewayError, PaymentGateway, PaymentIntent},
    state::AppState,
    store::{MemoryStore, Store},
};
use tower::ServiceExt;

/// Gateway double that records the amounts it was asked for.
#[derive(Default)]
pub struct StubGateway {
    pub fail_with: Option<String>,
    pub calls: Mutex<Vec<(Option<String>, String)>>,
}

impl StubGateway {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_payment_intent(
        &self,
        amount: Option<&str>,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((amount.map(str::to_string), currency.to_string()));
        match &self.fail_with {
            Some(message) => Err(GatewayError::Rejected {
                status: 402,
                message: message.clone(),
            }),
            None => Ok(PaymentIntent {
                id: "pi_test_1".into(),
                client_secret: "pi_test_1_secret_abc".into(),
            }),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub gateway: Arc<StubGateway>,
}

pub fn memory_app() -> TestApp {
    with_gateway(StubGateway::default())
}

pub fn with_gateway(gateway: StubGateway) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let gateway = Arc::new(gateway);
    let state = AppState::new(store.clone(), gateway.clone());
    TestApp {
        router: build_router(state),
        store,
        gateway,
    }
}

pub fn app_with(store: Arc<dyn Store>, gateway: Arc<dyn PaymentGateway>) -> Router {
    build_router(AppState::new(store, gateway))
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}
