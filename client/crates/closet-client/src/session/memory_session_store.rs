use crate::session::{SessionStore, StorageError, StorageKey, StorageResult};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

/// In-process store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<StorageKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential, as if a previous launch logged in.
    pub fn with_credential(token: &str) -> Self {
        let store = Self::default();
        if let Ok(mut values) = store.values.lock() {
            values.insert(StorageKey::Token, token.to_string());
        }
        store
    }

    /// Snapshot of a stored value, bypassing the async interface.
    pub fn peek(&self, key: StorageKey) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(&key).cloned())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::unavailable("memory store lock poisoned"))?;
        Ok(values.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::unavailable("memory store lock poisoned"))?;
        values.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> StorageResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::unavailable("memory store lock poisoned"))?;
        values.remove(&key);
        Ok(())
    }
}
