//! Item handlers: list and create.

use crate::error::AppError;
use crate::model::{CreateItemRequest, Item};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

pub const ITEMS_ALLOW: &str = "GET, POST, OPTIONS";

/// GET /api/items: every item, newest first. Always an array.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state
        .items
        .list()
        .await
        .map_err(AppError::store("failed to load items"))?;
    Ok(Json(items))
}

/// POST /api/items: body `{"title": "..."}`. The body is taken raw so any
/// decode failure is a 400 regardless of `Content-Type`.
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let title = CreateItemRequest::decode(&body)?;
    let item = state
        .items
        .create(&title)
        .await
        .map_err(AppError::store("failed to create item"))?;
    tracing::debug!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn items_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: ITEMS_ALLOW }
}
