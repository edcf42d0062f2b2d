// src/core/backup.rs

//! Full-registry backup envelope: every persisted collection bundled as
//! its raw serialized blob. Restore replaces only the members present in
//! the file, and takes effect on the next reload of the services.

use crate::core::PatrimoineError;
use crate::core::storage::{RecordStore, collections};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const BACKUP_VERSION: &str = "1.0";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<String>,
    #[serde(rename = "sheetUrl", default, skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupEnvelope {
    pub timestamp: String,
    pub version: String,
    pub data: BackupData,
}

/// Snapshots every collection into an envelope. Collections that have
/// never been written are simply absent from `data`.
pub async fn create(
    store: &dyn RecordStore,
    now: DateTime<Utc>,
) -> Result<BackupEnvelope, PatrimoineError> {
    Ok(BackupEnvelope {
        timestamp: now.to_rfc3339(),
        version: BACKUP_VERSION.to_string(),
        data: BackupData {
            users: store.load(collections::USERS).await?,
            texts: store.load(collections::TEXTS).await?,
            assets: store.load(collections::ASSETS).await?,
            contacts: store.load(collections::CONTACTS).await?,
            sheet_url: store.load(collections::SHEET_URL).await?,
        },
    })
}

pub fn to_json(envelope: &BackupEnvelope) -> Result<String, PatrimoineError> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Restores an envelope, replacing each target collection only when its
/// key is present. A malformed envelope aborts the whole operation with
/// the generic parse failure; nothing is partially applied.
pub async fn restore(store: &dyn RecordStore, raw: &str) -> Result<(), PatrimoineError> {
    let envelope: BackupEnvelope =
        serde_json::from_str(raw).map_err(|_| PatrimoineError::ParseFailure)?;
    info!(
        "Restoring backup from {} (version {})",
        envelope.timestamp, envelope.version
    );

    let members = [
        (collections::USERS, envelope.data.users),
        (collections::TEXTS, envelope.data.texts),
        (collections::ASSETS, envelope.data.assets),
        (collections::CONTACTS, envelope.data.contacts),
        (collections::SHEET_URL, envelope.data.sheet_url),
    ];
    for (collection, blob) in members {
        if let Some(blob) = blob {
            store.save(collection, &blob).await?;
        }
    }
    Ok(())
}

/// `patrimoine_backup_2024-06-01.json`
pub fn file_name(date: NaiveDate) -> String {
    format!("patrimoine_backup_{date}.json")
}
