//! Item persistence.
//!
//! Handlers talk to an [`ItemStore`]; production wires in [`DynamoDbStore`],
//! tests use the in-memory implementation.

mod dynamodb;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::Item;

pub use dynamodb::DynamoDbStore;

/// Failure talking to the backing store.
///
/// `message` carries the backend's diagnostic text. It is meant for the
/// server log and is never sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write item {id}: {message}")]
    Write { id: String, message: String },
    #[error("failed to read item {id}: {message}")]
    Read { id: String, message: String },
}

/// Key-value access to items by their primary key.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Write the full item, replacing any existing item with the same id.
    async fn put(&self, item: &Item) -> Result<(), StoreError>;

    /// Read an item by id.
    ///
    /// * `Ok(Some(item))` - item found
    /// * `Ok(None)` - no item with that id
    /// * `Err(_)` - the store could not be read
    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError>;
}
