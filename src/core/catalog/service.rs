// src/core/catalog/service.rs

use crate::core::PatrimoineError;
use crate::core::catalog::asset::{AssetDeclaration, AssetDraft};
use crate::core::catalog::validation::{self, SubmissionStep};
use crate::core::catalog::valuation;
use crate::core::contacts::{Bilingual, ComplianceStatus, ContactRegistry, MinistryContact};
use crate::core::directory::user::User;
use crate::core::ids::new_id;
use crate::core::storage::{RecordStore, collections};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Asset CRUD over the `assets_v1` collection.
///
/// Authorization is the caller's concern: every mutating call is expected
/// to be preceded by a [`crate::core::policy`] check. The catalog itself
/// only enforces submission validation.
pub struct AssetCatalog {
    store: Arc<dyn RecordStore>,
    assets: Vec<AssetDeclaration>,
}

impl AssetCatalog {
    pub async fn open(store: Arc<dyn RecordStore>) -> Result<Self, PatrimoineError> {
        let assets = match store.load(collections::ASSETS).await? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        Ok(Self { store, assets })
    }

    pub fn assets(&self) -> &[AssetDeclaration] {
        &self.assets
    }

    pub fn get(&self, id: &str) -> Option<&AssetDeclaration> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Assets visible to a user: everything for the global roles,
    /// otherwise only the user's own ministry (and nothing for a
    /// ministry-scoped user without a ministry).
    pub fn list_for(&self, user: &User) -> Vec<&AssetDeclaration> {
        if user.is_global_admin() {
            return self.assets.iter().collect();
        }
        match user.ministry_id.as_deref() {
            Some(ministry_id) => self
                .assets
                .iter()
                .filter(|a| a.ministry_id == ministry_id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Validates the active step and persists the draft as a new or
    /// updated declaration.
    ///
    /// A manual ministry entered by a global-role actor is created in the
    /// contact directory (status pending) before the asset is saved, and
    /// the asset is stamped with the resulting id. The stored
    /// `current_value` is the depreciation snapshot as of `today`.
    pub async fn submit(
        &mut self,
        user: &User,
        draft: AssetDraft,
        active_step: SubmissionStep,
        existing_id: Option<String>,
        contacts: &mut ContactRegistry,
        today: NaiveDate,
    ) -> Result<AssetDeclaration, PatrimoineError> {
        let global_actor = user.is_global_admin();
        let errors = validation::validate_step(&draft, active_step, global_actor);
        if !errors.is_clean() {
            return Err(PatrimoineError::Validation(errors));
        }

        let ministry_id = match (&draft.manual_ministry, global_actor) {
            (Some(name), true) => {
                let contact = manual_ministry_contact(name);
                let id = contact.id.clone();
                info!(
                    "Creating ministry '{}' from manual declaration entry",
                    contact.name.fr
                );
                contacts.add_contacts(vec![contact]).await?;
                id
            }
            _ => draft
                .ministry_id
                .clone()
                .filter(|m| !m.is_empty())
                .or_else(|| user.ministry_id.clone())
                .ok_or_else(|| {
                    PatrimoineError::InvalidRequest("no owner ministry for declaration".into())
                })?,
        };

        let id = existing_id.unwrap_or_else(|| new_id("ast"));
        let reference = if draft.reference.trim().is_empty() {
            format!("REF-{}", &id[id.len().saturating_sub(4)..])
        } else {
            draft.reference.trim().to_string()
        };
        let acquisition_date = draft.acquisition_date.unwrap_or(today);
        let current_value =
            valuation::depreciated_value(draft.value, acquisition_date, draft.kind(), today);

        let asset = AssetDeclaration {
            id,
            reference,
            ministry_id,
            sub_entity: draft.sub_entity.filter(|s| !s.is_empty()),
            condition: draft.condition,
            description: draft.description,
            acquisition_date,
            value: draft.value,
            current_value,
            wilaya: draft.wilaya,
            coordinates: draft.coordinates,
            location_details: draft.location_details,
            documents: draft.documents,
            specific: draft.specific,
        };
        self.upsert(asset.clone());
        self.persist().await?;
        Ok(asset)
    }

    /// Inserts a fully formed declaration (bulk import path).
    pub async fn create(&mut self, asset: AssetDeclaration) -> Result<(), PatrimoineError> {
        self.upsert(asset);
        self.persist().await
    }

    /// Id-keyed replace.
    pub async fn update(
        &mut self,
        id: &str,
        asset: AssetDeclaration,
    ) -> Result<(), PatrimoineError> {
        let slot = self
            .assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| PatrimoineError::NotFound(id.to_string()))?;
        *slot = AssetDeclaration {
            id: id.to_string(),
            ..asset
        };
        self.persist().await
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), PatrimoineError> {
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        if self.assets.len() == before {
            return Err(PatrimoineError::NotFound(id.to_string()));
        }
        self.persist().await
    }

    /// Drops every asset owned by a ministry; called alongside contact
    /// deletion to keep the soft reference consistent.
    pub async fn delete_for_ministry(&mut self, ministry_id: &str) -> Result<(), PatrimoineError> {
        let before = self.assets.len();
        self.assets.retain(|a| a.ministry_id != ministry_id);
        if self.assets.len() != before {
            info!(
                "Removed {} asset(s) owned by ministry '{}'",
                before - self.assets.len(),
                ministry_id
            );
            self.persist().await?;
        }
        Ok(())
    }

    fn upsert(&mut self, asset: AssetDeclaration) {
        match self.assets.iter_mut().find(|a| a.id == asset.id) {
            Some(slot) => *slot = asset,
            // Newest first, the order the listing shows them in.
            None => self.assets.insert(0, asset),
        }
    }

    async fn persist(&self) -> Result<(), PatrimoineError> {
        let blob = serde_json::to_string(&self.assets)?;
        self.store.save(collections::ASSETS, &blob).await
    }
}

fn manual_ministry_contact(name: &Bilingual) -> MinistryContact {
    let fr = if name.fr.trim().is_empty() {
        "Nouveau Ministère".to_string()
    } else {
        name.fr.trim().to_string()
    };
    let ar = if name.ar.trim().is_empty() {
        "وزارة جديدة".to_string()
    } else {
        name.ar.trim().to_string()
    };
    MinistryContact {
        id: new_id("min"),
        name: Bilingual::new(fr, ar),
        department: Bilingual::new("Direction Générale", "الإدارة العامة"),
        representative: "Admin".to_string(),
        role: Bilingual::new("Responsable", "مسؤول"),
        phone: String::new(),
        email: String::new(),
        compliance_status: ComplianceStatus::Pending,
        last_submission: None,
    }
}
