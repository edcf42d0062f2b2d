// src/core/sync.rs

//! One-way sheet synchronization: a flattened asset row POSTed to an
//! operator-configured endpoint after every save.
//!
//! The call is answer-blind fire-and-forget. A slow or failing endpoint is
//! logged and never surfaces to the save flow; there is no retry and no
//! cancellation.

use crate::config::SyncConfig;
use crate::core::PatrimoineError;
use crate::core::catalog::asset::AssetDeclaration;
use crate::core::contacts::Bilingual;
use crate::core::storage::{RecordStore, collections};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// The flattened row shape the sheet endpoint receives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SheetRow {
    id: String,
    reference: String,
    ministry_id: String,
    #[serde(rename = "ministryNameFR")]
    ministry_name_fr: String,
    #[serde(rename = "ministryNameAR")]
    ministry_name_ar: String,
    sub_entity: String,
    #[serde(rename = "type")]
    kind: String,
    condition: String,
    value: f64,
    acquisition_date: String,
    wilaya: String,
    location_details: String,
    lat: Option<f64>,
    lng: Option<f64>,
    description: String,
    brand: String,
    model: String,
    plate_number: String,
    serial_number: String,
    surface_area: Option<f64>,
    land_title: String,
    timestamp: String,
}

pub struct SheetSync {
    client: reqwest::Client,
    url: Option<Url>,
}

impl SheetSync {
    pub fn new(config: &SyncConfig, stored_url: Option<Url>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self {
            // The stored setting wins over the static config file.
            url: stored_url.or_else(|| config.sheet_url.clone()),
            client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Forwards a saved asset to the sheet endpoint in the background.
    /// Returns immediately; the response body is never read.
    pub fn spawn_sync(
        &self,
        asset: &AssetDeclaration,
        ministry_name: Option<&Bilingual>,
        now: DateTime<Utc>,
    ) {
        let Some(url) = self.url.clone() else {
            debug!("No sheet URL configured; skipping sync.");
            return;
        };
        let row = flatten(asset, ministry_name, now);
        let client = self.client.clone();
        let asset_id = asset.id.clone();
        tokio::spawn(async move {
            match client.post(url).json(&row).send().await {
                Ok(_) => debug!("Asset '{}' forwarded to sheet endpoint.", asset_id),
                Err(e) => warn!("Sheet sync for asset '{}' failed: {}", asset_id, e),
            }
        });
    }
}

fn flatten(
    asset: &AssetDeclaration,
    ministry_name: Option<&Bilingual>,
    now: DateTime<Utc>,
) -> SheetRow {
    let specific = &asset.specific;
    SheetRow {
        id: asset.id.clone(),
        reference: asset.reference.clone(),
        ministry_id: asset.ministry_id.clone(),
        ministry_name_fr: ministry_name.map(|n| n.fr.clone()).unwrap_or_default(),
        ministry_name_ar: ministry_name.map(|n| n.ar.clone()).unwrap_or_default(),
        sub_entity: asset.sub_entity.clone().unwrap_or_default(),
        kind: asset.kind().to_string(),
        condition: asset.condition.to_string(),
        value: asset.value,
        acquisition_date: asset.acquisition_date.to_string(),
        wilaya: asset.wilaya.to_string(),
        location_details: asset.location_details.clone(),
        lat: asset.coordinates.map(|c| c.lat),
        lng: asset.coordinates.map(|c| c.lng),
        description: asset.description.clone(),
        brand: specific.brand().unwrap_or_default().to_string(),
        model: specific.model().unwrap_or_default().to_string(),
        plate_number: specific.plate_number().unwrap_or_default().to_string(),
        serial_number: specific.serial_number().unwrap_or_default().to_string(),
        surface_area: specific.surface_area(),
        land_title: specific.land_title().unwrap_or_default().to_string(),
        timestamp: now.to_rfc3339(),
    }
}

/// Reads the operator-set sheet URL from its collection.
pub async fn load_sheet_url(store: &dyn RecordStore) -> Result<Option<Url>, PatrimoineError> {
    match store.load(collections::SHEET_URL).await? {
        Some(blob) => Ok(serde_json::from_str(&blob)?),
        None => Ok(None),
    }
}

/// Persists the operator-set sheet URL.
pub async fn save_sheet_url(store: &dyn RecordStore, url: &Url) -> Result<(), PatrimoineError> {
    let blob = serde_json::to_string(url)?;
    store.save(collections::SHEET_URL, &blob).await
}
