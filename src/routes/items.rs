use crate::handlers::items::{create_item, items_method_not_allowed, list_items};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(list_items)
                .post(create_item)
                // `get` would otherwise answer HEAD too
                .head(items_method_not_allowed)
                .fallback(items_method_not_allowed),
        )
        .with_state(state)
}
