use chrono::Utc;
use serde_json::json;
use shop_api::{
    models::User,
    store::{MemoryStore, Store, StoreError},
};

fn user(body: serde_json::Value) -> User {
    User::from_json(&body, Utc::now()).unwrap()
}

#[tokio::test]
async fn duplicate_email_is_refused() {
    let store = MemoryStore::new();
    store.insert_user(user(json!({ "email": "a@example.com" }))).await.unwrap();
    store.insert_user(user(json!({ "email": "b@example.com" }))).await.unwrap();

    let err = store
        .insert_user(user(json!({ "email": "a@example.com", "name": "again" })))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { collection: "users", .. }));
}

#[tokio::test]
async fn two_users_without_email_collide() {
    let store = MemoryStore::new();
    store.insert_user(user(json!({ "name": "first" }))).await.unwrap();
    let err = store.insert_user(user(json!({ "name": "second" }))).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { .. }));
}
