//! Document persistence.
//!
//! Handlers never see a concrete backend: they get an `Arc<dyn Store>` from
//! [`crate::state::AppState`]. Listing order is whatever the backend
//! returns natively.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DocumentId, Order, Product, User};

pub mod documents;
pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

pub const PRODUCTS: &str = "products";
pub const USERS: &str = "users";
pub const ORDERS: &str = "orders";

/// Name of the unique index on `users.email`.
pub const EMAIL_INDEX: &str = "email_1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("E11000 duplicate key error collection: {collection} index: {index}")]
    Duplicate {
        collection: &'static str,
        index: &'static str,
    },

    #[error(transparent)]
    Backend(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn insert_product(&self, product: Product) -> Result<Product, StoreError>;

    /// Exact match on `userId`; orders without a user never match.
    async fn orders_for_user(&self, user_id: &DocumentId) -> Result<Vec<Order>, StoreError>;

    async fn insert_order(&self, order: Order) -> Result<Order, StoreError>;

    /// Fails with [`StoreError::Duplicate`] when the email is already taken.
    async fn insert_user(&self, user: User) -> Result<User, StoreError>;
}

/// Used when no connection could be set up at all. Every call fails, so the
/// server can still start and answer health checks.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl Store for UnavailableStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.fail()
    }

    async fn insert_product(&self, _product: Product) -> Result<Product, StoreError> {
        self.fail()
    }

    async fn orders_for_user(&self, _user_id: &DocumentId) -> Result<Vec<Order>, StoreError> {
        self.fail()
    }

    async fn insert_order(&self, _order: Order) -> Result<Order, StoreError> {
        self.fail()
    }

    async fn insert_user(&self, _user: User) -> Result<User, StoreError> {
        self.fail()
    }
}

/// Opens the store named by `uri`. `memory://` selects [`MemoryStore`];
/// anything else goes to MongoDB. A URI the driver cannot parse yields an
/// [`UnavailableStore`] rather than an error.
pub async fn connect(uri: &str) -> Arc<dyn Store> {
    if uri.starts_with("memory://") {
        tracing::info!("using in-memory store");
        return Arc::new(MemoryStore::new());
    }

    match MongoStore::connect(uri).await {
        Ok(store) => {
            let probe = store.clone();
            tokio::spawn(async move {
                match probe.prepare().await {
                    Ok(()) => tracing::info!("MongoDB connected"),
                    Err(err) => tracing::error!(error = %err, "MongoDB error"),
                }
            });
            Arc::new(store)
        }
        Err(err) => {
            tracing::error!(error = %err, "MongoDB error");
            Arc::new(UnavailableStore::new(err.to_string()))
        }
    }
}
