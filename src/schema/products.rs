use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{Errors, Fields, ValidationError};
use crate::models::{DocumentId, Product, Review};

const MODEL: &str = "Product";

impl Product {
    /// Builds a new product from a request body. `rating` defaults to 0,
    /// `reviews` to empty and `createdAt` to `now`.
    pub fn from_json(body: &Value, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let fields = Fields::root(MODEL, body)?;
        let mut errors = Errors::default();

        let product = Product {
            id: DocumentId::generate(),
            name: fields.string("name", &mut errors),
            price: fields.number("price", &mut errors),
            description: fields.string("description", &mut errors),
            category: fields.string("category", &mut errors),
            image: fields.string("image", &mut errors),
            stock: fields.integer("stock", &mut errors),
            rating: fields.number("rating", &mut errors).unwrap_or(0.0),
            reviews: fields.array("reviews", &mut errors, |review, errors| Review {
                id: DocumentId::generate(),
                user: review.string("user", errors),
                comment: review.string("comment", errors),
                rating: review.number("rating", errors),
            }),
            created_at: fields.date("createdAt", &mut errors).unwrap_or(now),
        };

        errors.finish(MODEL)?;
        Ok(product)
    }
}
