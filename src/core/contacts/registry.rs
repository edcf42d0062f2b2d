// src/core/contacts/registry.rs

use crate::core::PatrimoineError;
use crate::core::contacts::{MinistryContact, WorkGroup, seed_contacts};
use crate::core::ids::new_id;
use crate::core::storage::{RecordStore, collections};
use std::sync::Arc;
use tracing::info;

/// Owns the ministry-contact and work-group collections.
///
/// Deleting a ministry is expected to be followed by
/// [`crate::core::catalog::AssetCatalog::delete_for_ministry`] on the asset
/// side; the two collections only share a soft reference.
pub struct ContactRegistry {
    store: Arc<dyn RecordStore>,
    contacts: Vec<MinistryContact>,
    groups: Vec<WorkGroup>,
}

impl ContactRegistry {
    /// Loads both collections, provisioning the seed ministries when the
    /// contact collection has never been written.
    pub async fn open(store: Arc<dyn RecordStore>) -> Result<Self, PatrimoineError> {
        let (contacts, seeded) = match store.load(collections::CONTACTS).await? {
            Some(blob) => (serde_json::from_str(&blob)?, false),
            None => (seed_contacts(), true),
        };
        let groups = match store.load(collections::GROUPS).await? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        let registry = Self {
            store,
            contacts,
            groups,
        };
        if seeded {
            info!("Contact collection initialized with seed ministries.");
            registry.persist_contacts().await?;
        }
        Ok(registry)
    }

    pub fn contacts(&self) -> &[MinistryContact] {
        &self.contacts
    }

    pub fn groups(&self) -> &[WorkGroup] {
        &self.groups
    }

    pub fn get(&self, id: &str) -> Option<&MinistryContact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Appends a batch of contacts (manual entry or CSV import).
    pub async fn add_contacts(
        &mut self,
        new_contacts: Vec<MinistryContact>,
    ) -> Result<(), PatrimoineError> {
        if new_contacts.is_empty() {
            return Ok(());
        }
        info!("Adding {} ministry contact(s)", new_contacts.len());
        self.contacts.extend(new_contacts);
        self.persist_contacts().await
    }

    /// Id-keyed replace of an existing contact.
    pub async fn update_contact(
        &mut self,
        contact: MinistryContact,
    ) -> Result<(), PatrimoineError> {
        let slot = self
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| PatrimoineError::NotFound(contact.id.clone()))?;
        *slot = contact;
        self.persist_contacts().await
    }

    pub async fn delete_contact(&mut self, id: &str) -> Result<(), PatrimoineError> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        if self.contacts.len() == before {
            return Err(PatrimoineError::NotFound(id.to_string()));
        }
        self.persist_contacts().await
    }

    pub async fn create_group(
        &mut self,
        name: impl Into<String>,
        contact_ids: Vec<String>,
    ) -> Result<WorkGroup, PatrimoineError> {
        let group = WorkGroup {
            id: new_id("grp"),
            name: name.into(),
            contact_ids,
        };
        self.groups.push(group.clone());
        self.persist_groups().await?;
        Ok(group)
    }

    pub async fn delete_group(&mut self, id: &str) -> Result<(), PatrimoineError> {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        if self.groups.len() == before {
            return Err(PatrimoineError::NotFound(id.to_string()));
        }
        self.persist_groups().await
    }

    async fn persist_contacts(&self) -> Result<(), PatrimoineError> {
        let blob = serde_json::to_string(&self.contacts)?;
        self.store.save(collections::CONTACTS, &blob).await
    }

    async fn persist_groups(&self) -> Result<(), PatrimoineError> {
        let blob = serde_json::to_string(&self.groups)?;
        self.store.save(collections::GROUPS, &blob).await
    }
}
