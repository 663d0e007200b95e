use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{Errors, Fields, ValidationError};
use crate::models::{DocumentId, User};

const MODEL: &str = "User";

impl User {
    // Email uniqueness is the store's job, not the schema's.
    pub fn from_json(body: &Value, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let fields = Fields::root(MODEL, body)?;
        let mut errors = Errors::default();

        let user = User {
            id: DocumentId::generate(),
            name: fields.string("name", &mut errors),
            email: fields.string("email", &mut errors),
            password: fields.string("password", &mut errors),
            address: fields.string("address", &mut errors),
            phone: fields.string("phone", &mut errors),
            created_at: fields.date("createdAt", &mut errors).unwrap_or(now),
        };

        errors.finish(MODEL)?;
        Ok(user)
    }
}
