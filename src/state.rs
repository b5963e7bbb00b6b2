//! Shared application state for all routes.

use crate::repository::{ItemRepository, PgItemRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        AppState { items }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        AppState::new(Arc::new(PgItemRepository::new(pool)))
    }
}
