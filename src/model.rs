//! `Item` record and the create-request body.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted item. `id` and `created_at` are assigned by the store.
/// `id` is `i32` because the column is `SERIAL` (INT4).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Title that is known to be non-empty after trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::BadRequest("title is required".into()));
        }
        Ok(ItemTitle(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /api/items`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateItemRequest {
    pub title: String,
}

impl CreateItemRequest {
    /// Decode the raw body and validate it in one step.
    pub fn decode(body: &[u8]) -> Result<ItemTitle, AppError> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON: {}", e)))?;
        // serde would also accept a struct encoded as a sequence
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        let req: CreateItemRequest = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON: {}", e)))?;
        ItemTitle::parse(&req.title)
    }
}
