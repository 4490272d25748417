//! Opaque key-value store for game records. The service never looks inside
//! the values; it only reads, writes, and compare-and-swaps whole strings.

use std::sync::Arc;

use async_trait::async_trait;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write `value` only if the stored value still equals `expected`.
    /// Returns false when the entry is missing or has changed underneath.
    async fn put_if(&self, key: &str, expected: &str, value: &str) -> Result<bool, StoreError>;
}

pub type SharedStore = Arc<dyn GameStore>;
