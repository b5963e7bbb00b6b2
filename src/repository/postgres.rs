use super::ItemRepository;
use crate::error::RepositoryError;
use crate::model::{Item, ItemTitle};
use crate::store;
use async_trait::async_trait;
use sqlx::PgPool;

const INSERT_ITEM: &str = "INSERT INTO items (title) VALUES ($1) RETURNING id, title, created_at";
const SELECT_ITEMS: &str = "SELECT id, title, created_at FROM items ORDER BY created_at DESC, id DESC";

/// PostgreSQL-backed repository. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        PgItemRepository { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, title: &ItemTitle) -> Result<Item, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(INSERT_ITEM)
            .bind(title.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let items = sqlx::query_as::<_, Item>(SELECT_ITEMS)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        store::ping(&self.pool).await?;
        Ok(())
    }
}
