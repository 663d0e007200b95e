use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EMAIL_INDEX, Store, StoreError, USERS};
use crate::models::{DocumentId, Order, Product, User};

#[derive(Default)]
struct Collections {
    products: Vec<Product>,
    users: Vec<User>,
    orders: Vec<Order>,
}

/// In-process store kept in insertion order. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn product_count(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn order_count(&self) -> usize {
        self.inner.read().await.orders.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.read().await.products.clone())
    }

    async fn insert_product(&self, product: Product) -> Result<Product, StoreError> {
        self.inner.write().await.products.push(product.clone());
        Ok(product)
    }

    async fn orders_for_user(&self, user_id: &DocumentId) -> Result<Vec<Order>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .iter()
            .filter(|order| order.user_id.as_ref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn insert_order(&self, order: Order) -> Result<Order, StoreError> {
        self.inner.write().await.orders.push(order.clone());
        Ok(order)
    }

    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        // A missing email counts as a value, same as a unique index over null.
        if inner.users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::Duplicate {
                collection: USERS,
                index: EMAIL_INDEX,
            });
        }
        inner.users.push(user.clone());
        Ok(user)
    }
}
