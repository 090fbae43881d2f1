use crate::shared::infrastructure::cart_storage::{CartStorage, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCartStorage {
    slots: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
    is_offline: AtomicBool,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots: RwLock::new(slots),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn slot(&self, key: &str) -> Option<String> {
        self.slots.read().await.get(key).cloned()
    }
}

#[async_trait::async_trait]
impl CartStorage for InMemoryCartStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("Cart storage offline".into()));
        }
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("Cart storage offline".into()));
        }
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
