use crate::session::{StorageKey, StorageResult};

use async_trait::async_trait;

/// Durable key/value storage that outlives the process.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: StorageKey) -> StorageResult<Option<String>>;

    async fn set(&self, key: StorageKey, value: &str) -> StorageResult<()>;

    /// Removing a key that is not present is not an error.
    async fn remove(&self, key: StorageKey) -> StorageResult<()>;
}
