use chrono::Utc;
use mongodb::bson::{Bson, Document, doc};
use serde_json::json;
use shop_api::{
    models::{DocumentId, Order, Product, User},
    store::{MongoStore, Store, StoreError},
};

// Round trip against a real server. Skipped unless TEST_MONGODB_URI is set;
// the database named in the URI is dropped first.
#[tokio::test]
async fn mongo_store_round_trip() -> anyhow::Result<()> {
    let uri = match std::env::var("TEST_MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("Skipping test: set TEST_MONGODB_URI to run the MongoDB round trip.");
            return Ok(());
        }
    };

    let store = MongoStore::connect(&uri).await?;
    store.database().drop().await?;
    store.prepare().await?;

    let product = Product::from_json(&json!({ "name": "Mug", "price": 9.5, "stock": 3 }), Utc::now())?;
    let product = store.insert_product(product).await?;
    let listed = store.list_products().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, product.id);
    assert_eq!(listed[0].rating, 0.0);

    let user_id = DocumentId::generate();
    let order = Order::from_json(
        &json!({ "userId": user_id.to_string(), "items": [{ "productId": product.id.to_string(), "quantity": 1, "price": 9.5 }], "total": 9.5 }),
        Utc::now(),
    )?;
    store.insert_order(order).await?;
    let orders = store.orders_for_user(&user_id).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, "pending");
    assert!(store.orders_for_user(&DocumentId::generate()).await?.is_empty());

    let raw = store
        .database()
        .collection::<Document>("orders")
        .find_one(doc! { "userId": user_id.object_id() })
        .await?
        .expect("order stored under a native ObjectId");
    assert!(matches!(raw.get("_id"), Some(Bson::ObjectId(_))));
    assert!(matches!(raw.get("createdAt"), Some(Bson::DateTime(_))));
    let item = raw.get_array("items")?[0].as_document().cloned().unwrap_or_default();
    assert_eq!(item.get("productId"), Some(&Bson::ObjectId(product.id.object_id())));

    let user = User::from_json(&json!({ "email": "dup@example.com" }), Utc::now())?;
    store.insert_user(user).await?;
    let again = User::from_json(&json!({ "email": "dup@example.com" }), Utc::now())?;
    assert!(matches!(
        store.insert_user(again).await,
        Err(StoreError::Duplicate { .. })
    ));

    Ok(())
}
