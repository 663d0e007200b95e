//! BSON shapes of the stored collections.
//!
//! Ids and references are native ObjectIds and `createdAt` a native date,
//! so the collections sort and filter like any other MongoDB data. The JSON
//! models are converted to and from these at the store boundary.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderItem, Product, Review, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<ReviewDocument>,
    /// Documents written by other tools may lack it; the id's timestamp is
    /// used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    #[serde(default)]
    pub items: Vec<OrderItemDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

fn to_bson_date(date: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(date.timestamp_millis())
}

/// Dates outside chrono's range are clamped to its bounds.
fn from_bson_date(date: bson::DateTime) -> DateTime<Utc> {
    let millis = date.timestamp_millis();
    DateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

fn created_at(stored: Option<bson::DateTime>, id: &ObjectId) -> DateTime<Utc> {
    from_bson_date(stored.unwrap_or_else(|| id.timestamp()))
}

impl From<&Review> for ReviewDocument {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.object_id(),
            user: review.user.clone(),
            comment: review.comment.clone(),
            rating: review.rating,
        }
    }
}

impl From<ReviewDocument> for Review {
    fn from(doc: ReviewDocument) -> Self {
        Self {
            id: doc.id.into(),
            user: doc.user,
            comment: doc.comment,
            rating: doc.rating,
        }
    }
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.object_id(),
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            stock: product.stock,
            rating: product.rating,
            reviews: product.reviews.iter().map(ReviewDocument::from).collect(),
            created_at: Some(to_bson_date(product.created_at)),
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            created_at: created_at(doc.created_at, &doc.id),
            id: doc.id.into(),
            name: doc.name,
            price: doc.price,
            description: doc.description,
            category: doc.category,
            image: doc.image,
            stock: doc.stock,
            rating: doc.rating,
            reviews: doc.reviews.into_iter().map(Review::from).collect(),
        }
    }
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.object_id(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            address: user.address.clone(),
            phone: user.phone.clone(),
            created_at: Some(to_bson_date(user.created_at)),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            created_at: created_at(doc.created_at, &doc.id),
            id: doc.id.into(),
            name: doc.name,
            email: doc.email,
            password: doc.password,
            address: doc.address,
            phone: doc.phone,
        }
    }
}

impl From<&OrderItem> for OrderItemDocument {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id.object_id(),
            product_id: item.product_id.map(|id| id.object_id()),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<OrderItemDocument> for OrderItem {
    fn from(doc: OrderItemDocument) -> Self {
        Self {
            id: doc.id.into(),
            product_id: doc.product_id.map(Into::into),
            quantity: doc.quantity,
            price: doc.price,
        }
    }
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.object_id(),
            user_id: order.user_id.map(|id| id.object_id()),
            items: order.items.iter().map(OrderItemDocument::from).collect(),
            total: order.total,
            status: order.status.clone(),
            payment_id: order.payment_id.clone(),
            created_at: Some(to_bson_date(order.created_at)),
        }
    }
}

impl From<OrderDocument> for Order {
    fn from(doc: OrderDocument) -> Self {
        Self {
            created_at: created_at(doc.created_at, &doc.id),
            id: doc.id.into(),
            user_id: doc.user_id.map(Into::into),
            items: doc.items.into_iter().map(OrderItem::from).collect(),
            total: doc.total,
            status: doc.status,
            payment_id: doc.payment_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mongodb::bson::{Bson, doc};

    use super::*;
    use crate::models::DocumentId;

    fn order() -> Order {
        Order {
            id: DocumentId::generate(),
            user_id: Some(DocumentId::generate()),
            items: vec![OrderItem {
                id: DocumentId::generate(),
                product_id: Some(DocumentId::generate()),
                quantity: Some(2),
                price: Some(100.0),
            }],
            total: Some(200.0),
            status: "pending".to_string(),
            payment_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn order_is_stored_with_native_ids_and_date() {
        let order = order();
        let stored = bson::to_document(&OrderDocument::from(&order)).unwrap();

        assert_eq!(stored.get("_id"), Some(&Bson::ObjectId(order.id.object_id())));
        assert!(matches!(stored.get("userId"), Some(Bson::ObjectId(_))));
        assert!(matches!(stored.get("createdAt"), Some(Bson::DateTime(_))));
        let item = stored.get_array("items").unwrap()[0].as_document().unwrap();
        assert!(matches!(item.get("productId"), Some(Bson::ObjectId(_))));
    }

    #[test]
    fn stored_order_reads_back_unchanged() {
        let order = order();
        let stored = bson::to_document(&OrderDocument::from(&order)).unwrap();
        let read: OrderDocument = bson::from_document(stored).unwrap();
        assert_eq!(Order::from(read), order);
    }

    #[test]
    fn missing_created_at_falls_back_to_the_id_timestamp() {
        let id = ObjectId::new();
        let stored = doc! { "_id": id, "name": "Mug" };
        let product = Product::from(bson::from_document::<ProductDocument>(stored).unwrap());
        assert_eq!(product.created_at.timestamp(), id.timestamp().timestamp_millis() / 1000);
        assert_eq!(product.rating, 0.0);
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn out_of_range_date_is_clamped() {
        let far = bson::DateTime::from_millis(i64::MAX);
        assert_eq!(from_bson_date(far), DateTime::<Utc>::MAX_UTC);
    }
}
