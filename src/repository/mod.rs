//! Item persistence behind a trait so handlers never see the pool directly.

mod memory;
mod postgres;

pub use memory::InMemoryItemRepository;
pub use postgres::PgItemRepository;

use crate::error::RepositoryError;
use crate::model::{Item, ItemTitle};
use async_trait::async_trait;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert one item and return it as stored.
    async fn create(&self, title: &ItemTitle) -> Result<Item, RepositoryError>;

    /// All items, newest first; ties on `created_at` go to the higher id.
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Cheap round trip to check the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
