//! In-process store used for tests and for running without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{GameStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("game table lock poisoned".to_string()))
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn put_if(&self, key: &str, expected: &str, value: &str) -> Result<bool, StoreError> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(current) if current == expected => {
                entries.insert(key.to_string(), value.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
