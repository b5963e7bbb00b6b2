//! Items service: a single `Item` resource stored in PostgreSQL and served as JSON over HTTP.

pub mod app;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::{DbConfig, ServerConfig};
pub use cors::CorsPolicy;
pub use error::{AppError, ConfigError, RepositoryError};
pub use model::{CreateItemRequest, Item, ItemTitle};
pub use repository::{InMemoryItemRepository, ItemRepository, PgItemRepository};
pub use state::AppState;
pub use store::{bootstrap, ensure_items_table};
