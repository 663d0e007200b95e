//! Coercion of loosely-typed JSON bodies into typed documents.
//!
//! Every entity exposes a `from_json` constructor that casts each declared
//! field, fills in defaults and drops keys the schema does not know. Cast
//! failures are collected so a single response reports all of them.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::DocumentId;

pub mod orders;
pub mod products;
pub mod users;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{model} validation failed: {}", describe(.errors))]
pub struct ValidationError {
    pub model: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn not_an_object(model: &'static str, value: &Value) -> Self {
        Self {
            model,
            errors: vec![FieldError {
                path: String::new(),
                message: format!(
                    "document must be a JSON object, got {}",
                    type_name(value)
                ),
            }],
        }
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| {
            if e.path.is_empty() {
                e.message.clone()
            } else {
                format!("{}: {}", e.path, e.message)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Largest distance from the epoch a timestamp may have (±100,000,000 days).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Accumulates cast failures while a document is being built.
#[derive(Debug, Default)]
pub(crate) struct Errors(Vec<FieldError>);

impl Errors {
    fn cast(&mut self, kind: &str, value: &Value, path: String) {
        let message = format!(
            "Cast to {kind} failed for value {} (type {}) at path \"{path}\"",
            render(value),
            type_name(value)
        );
        self.0.push(FieldError { path, message });
    }

    pub(crate) fn finish(self, model: &'static str) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                model,
                errors: self.0,
            })
        }
    }
}

/// A view over one JSON object (the body itself or an embedded element).
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> Fields<'a> {
    pub(crate) fn root(model: &'static str, value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                prefix: String::new(),
            }),
            other => Err(ValidationError::not_an_object(model, other)),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    /// `null` reads the same as a missing key.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn string(&self, key: &str, errors: &mut Errors) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => {
                errors.cast("string", other, self.path(key));
                None
            }
        }
    }

    pub(crate) fn number(&self, key: &str, errors: &mut Errors) -> Option<f64> {
        let value = self.get(key)?;
        let cast = match value {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) if s.trim().is_empty() => return None,
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        };
        if cast.is_none() {
            errors.cast("Number", value, self.path(key));
        }
        cast
    }

    pub(crate) fn integer(&self, key: &str, errors: &mut Errors) -> Option<i64> {
        let value = self.get(key)?;
        let mut scratch = Errors::default();
        let number = match self.number(key, &mut scratch) {
            Some(n) => n,
            None if scratch.0.is_empty() => return None,
            None => {
                errors.cast("integer", value, self.path(key));
                return None;
            }
        };
        // 2^53: the largest range in which every f64 integer is exact
        if number.fract() == 0.0 && number.abs() <= 9_007_199_254_740_992.0 {
            Some(number as i64)
        } else {
            errors.cast("integer", value, self.path(key));
            None
        }
    }

    pub(crate) fn date(&self, key: &str, errors: &mut Errors) -> Option<DateTime<Utc>> {
        let value = self.get(key)?;
        let cast = match value {
            Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Value::Number(n) => n
                .as_f64()
                .filter(|ms| ms.is_finite() && ms.abs() <= MAX_EPOCH_MILLIS)
                .and_then(|ms| DateTime::from_timestamp_millis(ms.trunc() as i64)),
            _ => None,
        };
        if cast.is_none() {
            errors.cast("date", value, self.path(key));
        }
        cast
    }

    pub(crate) fn id(&self, key: &str, errors: &mut Errors) -> Option<DocumentId> {
        let value = self.get(key)?;
        let cast = value.as_str().and_then(DocumentId::parse);
        if cast.is_none() {
            errors.cast("ObjectId", value, self.path(key));
        }
        cast
    }

    /// Casts an array of embedded documents. A lone object is treated as a
    /// one-element array.
    pub(crate) fn array<T>(
        &self,
        key: &str,
        errors: &mut Errors,
        mut element: impl FnMut(&Fields<'a>, &mut Errors) -> T,
    ) -> Vec<T> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };
        let elements: Vec<&'a Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(_) => vec![value],
            other => {
                errors.cast("Array", other, self.path(key));
                return Vec::new();
            }
        };

        let mut out = Vec::with_capacity(elements.len());
        for (index, item) in elements.into_iter().enumerate() {
            let path = format!("{}.{}", self.path(key), index);
            match item {
                Value::Object(object) => {
                    let nested = Fields {
                        object,
                        prefix: path,
                    };
                    out.push(element(&nested, errors));
                }
                other => errors.cast("Embedded", other, path),
            }
        }
        out
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}
