use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{Errors, Fields, ValidationError};
use crate::models::{DocumentId, Order, OrderItem};

const MODEL: &str = "Order";

pub const DEFAULT_STATUS: &str = "pending";

impl Order {
    /// Builds a new order from a request body. Referenced users and products
    /// are not looked up and `total` is taken as given.
    pub fn from_json(body: &Value, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let fields = Fields::root(MODEL, body)?;
        let mut errors = Errors::default();

        let order = Order {
            id: DocumentId::generate(),
            user_id: fields.id("userId", &mut errors),
            items: fields.array("items", &mut errors, |item, errors| OrderItem {
                id: DocumentId::generate(),
                product_id: item.id("productId", errors),
                quantity: item.integer("quantity", errors),
                price: item.number("price", errors),
            }),
            total: fields.number("total", &mut errors),
            status: fields
                .string("status", &mut errors)
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            payment_id: fields.string("paymentId", &mut errors),
            created_at: fields.date("createdAt", &mut errors).unwrap_or(now),
        };

        errors.finish(MODEL)?;
        Ok(order)
    }
}
