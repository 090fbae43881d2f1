// Persistent key-value slot the cart is written to after every successful mutation.
//
// A slot holds one serialized value and is always overwritten wholesale.

pub mod file;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Returns `None` when nothing has been written to `key` yet.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
