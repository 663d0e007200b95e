use chrono::Utc;
use serde_json::json;
use shop_api::{
    config::AppConfig,
    models::{Product, User},
    store::{MongoStore, Store, StoreError},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let store = MongoStore::connect(&config.mongodb_uri).await?;
    store.prepare().await?;

    seed_users(&store).await?;
    seed_products(&store).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_users(store: &MongoStore) -> anyhow::Result<()> {
    let users = vec![
        json!({
            "name": "Demo Admin",
            "email": "admin@example.com",
            "password": "admin123",
            "address": "1 Ferris Way",
            "phone": "555-0100"
        }),
        json!({
            "name": "Demo User",
            "email": "user@example.com",
            "password": "user123",
            "address": "2 Crab Street",
            "phone": "555-0101"
        }),
    ];

    for body in users {
        let user = User::from_json(&body, Utc::now())?;
        let email = user.email.clone().unwrap_or_default();
        match store.insert_user(user).await {
            Ok(user) => println!("Created user {email} ({})", user.id),
            Err(StoreError::Duplicate { .. }) => println!("User {email} already exists, skipped"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

async fn seed_products(store: &MongoStore) -> anyhow::Result<()> {
    let products = vec![
        ("Axum Hoodie", "Warm hoodie for Rustaceans", "apparel", 55.0, 50),
        ("Ferris Mug", "Coffee tastes better with Ferris", "kitchen", 12.0, 100),
        ("Rust Sticker Pack", "Decorate your laptop", "accessories", 5.0, 200),
        ("E-book: Async Rust", "Learn async Rust patterns", "books", 25.0, 75),
    ];

    for (name, description, category, price, stock) in products {
        let body = json!({
            "name": name,
            "description": description,
            "category": category,
            "price": price,
            "stock": stock,
            "image": format!("https://picsum.photos/seed/{}/400", name.len()),
        });
        let product = Product::from_json(&body, Utc::now())?;
        let product = store.insert_product(product).await?;
        println!("Created product {name} ({})", product.id);
    }

    println!("Seeded products");
    Ok(())
}
