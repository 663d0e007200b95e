use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use super::{
    EMAIL_INDEX, ORDERS, PRODUCTS, Store, StoreError, USERS,
    documents::{OrderDocument, ProductDocument, UserDocument},
};
use crate::models::{DocumentId, Order, Product, User};

const DEFAULT_DATABASE: &str = "ecommerce";
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB-backed store. Cloning shares the driver's connection pool.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Parses the URI and builds a client. The driver connects lazily, so
    /// an unreachable server only shows up on the first operation.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        tracing::debug!(database = %db.name(), "mongo client created");
        Ok(Self { db })
    }

    /// Pings the server and makes sure the unique email index exists.
    pub async fn prepare(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name(EMAIL_INDEX.to_string())
                    .unique(true)
                    .build(),
            )
            .build();
        self.users().create_index(index).await?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn products(&self) -> Collection<ProductDocument> {
        self.db.collection(PRODUCTS)
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USERS)
    }

    fn orders(&self) -> Collection<OrderDocument> {
        self.db.collection(ORDERS)
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.products().find(doc! {}).await?;
        let docs: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Product::from).collect())
    }

    async fn insert_product(&self, product: Product) -> Result<Product, StoreError> {
        self.products()
            .insert_one(ProductDocument::from(&product))
            .await?;
        Ok(product)
    }

    async fn orders_for_user(&self, user_id: &DocumentId) -> Result<Vec<Order>, StoreError> {
        let cursor = self
            .orders()
            .find(doc! { "userId": user_id.object_id() })
            .await?;
        let docs: Vec<OrderDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Order::from).collect())
    }

    async fn insert_order(&self, order: Order) -> Result<Order, StoreError> {
        self.orders()
            .insert_one(OrderDocument::from(&order))
            .await?;
        Ok(order)
    }

    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        match self.users().insert_one(UserDocument::from(&user)).await {
            Ok(_) => Ok(user),
            Err(err) if is_duplicate_key(&err) => Err(StoreError::Duplicate {
                collection: USERS,
                index: EMAIL_INDEX,
            }),
            Err(err) => Err(err.into()),
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY
    )
}
