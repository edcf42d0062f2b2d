// src/core/storage/memory.rs

//! In-memory record store used by tests and by callers that want a
//! throwaway registry without touching the filesystem.

use crate::core::PatrimoineError;
use crate::core::storage::RecordStore;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn load(&self, collection: &str) -> Result<Option<String>, PatrimoineError> {
        Ok(self.blobs.lock().get(collection).cloned())
    }

    async fn save(&self, collection: &str, blob: &str) -> Result<(), PatrimoineError> {
        self.blobs
            .lock()
            .insert(collection.to_string(), blob.to_string());
        Ok(())
    }

    async fn remove(&self, collection: &str) -> Result<(), PatrimoineError> {
        self.blobs.lock().remove(collection);
        Ok(())
    }
}
