//! In-memory item stores for handler tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};
use crate::models::Item;

/// Items kept in a `HashMap`; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn put(&self, item: &Item) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }
}

/// A store whose every call fails, standing in for an unreachable backend.
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn put(&self, item: &Item) -> Result<(), StoreError> {
        Err(StoreError::Write {
            id: item.id.clone(),
            message: "connection refused".to_string(),
        })
    }

    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        Err(StoreError::Read {
            id: id.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites_same_id() {
        let store = InMemoryStore::new();
        let first = Item { id: "a".to_string(), name: "one".to_string() };
        let second = Item { id: "a".to_string(), name: "two".to_string() };

        store.put(&first).await.unwrap();
        store.put(&second).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("a").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }
}
