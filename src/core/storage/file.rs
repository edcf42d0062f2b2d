// src/core/storage/file.rs

//! File-backed record store: one `<collection>.json` per collection under a
//! data directory. Writes go through a temporary file followed by a rename
//! so a crash mid-write never leaves a torn blob behind.

use crate::core::PatrimoineError;
use crate::core::storage::RecordStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

#[derive(Debug)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    /// Opens (and creates, if needed) the data directory.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, PatrimoineError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        info!("Record store opened at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn load(&self, collection: &str) -> Result<Option<String>, PatrimoineError> {
        let path = self.path_for(collection);
        match fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "Collection '{}' not found at {}. Starting fresh.",
                    collection,
                    path.display()
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, collection: &str, blob: &str) -> Result<(), PatrimoineError> {
        let path = self.path_for(collection);
        let temp_path = self
            .root
            .join(format!("{collection}.json.tmp.{}", rand::random::<u32>()));
        fs::write(&temp_path, blob).await?;
        fs::rename(&temp_path, &path).await?;
        debug!(
            "Collection '{}' written ({} bytes) to {}",
            collection,
            blob.len(),
            path.display()
        );
        Ok(())
    }

    async fn remove(&self, collection: &str) -> Result<(), PatrimoineError> {
        match fs::remove_file(self.path_for(collection)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
