// src/core/storage/store.rs

use crate::core::PatrimoineError;
use async_trait::async_trait;

/// A named-collection blob store.
///
/// Services receive an explicit handle to a `RecordStore` at construction
/// time; nothing in the crate reaches for an ambient singleton, so tests can
/// substitute [`super::MemoryRecordStore`] for the file-backed store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads the raw serialized blob of a collection, or `None` if the
    /// collection has never been written.
    async fn load(&self, collection: &str) -> Result<Option<String>, PatrimoineError>;

    /// Replaces the whole collection with the given blob.
    async fn save(&self, collection: &str, blob: &str) -> Result<(), PatrimoineError>;

    /// Drops the collection entirely. Removing a collection that does not
    /// exist is not an error.
    async fn remove(&self, collection: &str) -> Result<(), PatrimoineError>;
}
