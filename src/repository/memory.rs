//! In-memory repository for tests and running without a database.

use super::ItemRepository;
use crate::error::RepositoryError;
use crate::model::{Item, ItemTitle};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Items live in a `Vec` in insertion order; ids start at 1.
///
/// [`set_available`](Self::set_available) switches the store "down" so every
/// call fails with [`RepositoryError::Unavailable`], which is how tests
/// simulate a severed database connection.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Unavailable)
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, title: &ItemTitle) -> Result<Item, RepositoryError> {
        self.check()?;
        let mut items = self.items.write().await;
        let id = items.last().map_or(1, |last| last.id + 1);
        let item = Item {
            id,
            title: title.as_str().to_string(),
            created_at: Utc::now(),
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        self.check()?;
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check()
    }
}
