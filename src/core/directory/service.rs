// src/core/directory/service.rs

use crate::core::PatrimoineError;
use crate::core::directory::credentials::{hash_password, verify_password};
use crate::core::directory::migration::{self, SUPERADMIN_USERNAME};
use crate::core::directory::user::{Role, Section, User, UsersFile};
use crate::core::ids::new_id;
use crate::core::policy;
use crate::core::storage::{RecordStore, collections};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for self-service registration: a ministry signing itself up always
/// lands as a MinistryAdmin with the default section set for that role.
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub ministry_id: String,
}

/// Input for administrative create-or-update of a user record.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    /// Present for updates; `None` creates a new record.
    pub id: Option<String>,
    pub username: String,
    /// Plaintext to (re)hash. `None` on update keeps the stored hash.
    pub password: Option<String>,
    pub full_name: String,
    pub role: Role,
    pub ministry_id: Option<String>,
    pub allowed_tabs: Vec<Section>,
}

/// The user directory: owns the in-memory user collection and its
/// persistence. Every load runs the self-healing pass; every mutation
/// rewrites the whole collection.
pub struct UserDirectory {
    store: Arc<dyn RecordStore>,
    file: UsersFile,
}

impl UserDirectory {
    /// Loads (or initializes) the user collection and applies the
    /// self-healing migration, persisting back only if a rule changed
    /// something.
    pub async fn open(store: Arc<dyn RecordStore>) -> Result<Self, PatrimoineError> {
        let file = match store.load(collections::USERS).await? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => UsersFile::default(),
        };
        let mut directory = Self { store, file };
        if migration::heal(&mut directory.file)? {
            info!("User collection healed on load; persisting.");
            directory.persist().await?;
        }
        Ok(directory)
    }

    pub fn users(&self) -> &[User] {
        &self.file.users
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        let target = username.trim().to_lowercase();
        self.file
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == target)
    }

    /// Checks a credential pair. The username match is trimmed and
    /// case-insensitive; the password is verified against the stored Argon2
    /// hash. The returned record is defensively re-healed even though
    /// storage was already migrated on load.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, PatrimoineError> {
        let user = self
            .find_by_username(username)
            .ok_or(PatrimoineError::InvalidCredentials)?;
        if !verify_password(password, &user.password_hash) {
            warn!("Failed login attempt for '{}'", user.username);
            return Err(PatrimoineError::InvalidCredentials);
        }
        Ok(migration::heal_record(user.clone()))
    }

    /// Self-service registration. Rejects a username that already exists
    /// case-insensitively.
    pub async fn register(&mut self, reg: Registration) -> Result<User, PatrimoineError> {
        let username = reg.username.trim().to_lowercase();
        if username.is_empty() {
            return Err(PatrimoineError::InvalidRequest(
                "username must not be empty".into(),
            ));
        }
        if self.find_by_username(&username).is_some() {
            return Err(PatrimoineError::DuplicateUsername(username));
        }

        let user = migration::heal_record(User {
            id: new_id("usr"),
            username,
            password_hash: hash_password(&reg.password)?,
            full_name: reg.full_name.trim().to_string(),
            role: Role::MinistryAdmin,
            ministry_id: Some(reg.ministry_id),
            allowed_tabs: policy::default_sections(Role::MinistryAdmin),
        });
        self.file.users.push(user.clone());
        self.persist().await?;
        info!("Registered new ministry account '{}'", user.username);
        Ok(user)
    }

    /// Creates or updates a user record. Role-specific forced section sets
    /// win over whatever the caller supplied, and an absent set is
    /// recomputed from the role default.
    pub async fn save_user(&mut self, draft: UserDraft) -> Result<User, PatrimoineError> {
        let username = draft.username.trim().to_lowercase();
        if username.is_empty() || draft.full_name.trim().is_empty() {
            return Err(PatrimoineError::InvalidRequest(
                "username and full name are required".into(),
            ));
        }

        let duplicate = self.file.users.iter().any(|u| {
            u.username.eq_ignore_ascii_case(&username) && Some(&u.id) != draft.id.as_ref()
        });
        if duplicate {
            return Err(PatrimoineError::DuplicateUsername(username));
        }

        let existing = draft
            .id
            .as_ref()
            .and_then(|id| self.file.users.iter().find(|u| &u.id == id));
        let password_hash = match draft.password.as_deref().map(str::trim) {
            Some(plain) if !plain.is_empty() => hash_password(plain)?,
            _ => match existing {
                Some(user) => user.password_hash.clone(),
                None => {
                    return Err(PatrimoineError::InvalidRequest(
                        "a password is required for a new user".into(),
                    ));
                }
            },
        };

        let allowed_tabs = if draft.allowed_tabs.is_empty() {
            policy::default_sections(draft.role)
        } else {
            draft.allowed_tabs
        };

        let user = migration::heal_record(User {
            id: draft.id.unwrap_or_else(|| new_id("usr")),
            username,
            password_hash,
            full_name: draft.full_name.trim().to_string(),
            role: draft.role,
            ministry_id: draft.ministry_id.filter(|m| !m.is_empty()),
            allowed_tabs,
        });

        match self.file.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user.clone(),
            None => self.file.users.push(user.clone()),
        }
        self.persist().await?;
        Ok(user)
    }

    /// Removes a user by id. The root account is protected.
    pub async fn delete_user(&mut self, id: &str) -> Result<(), PatrimoineError> {
        if id == SUPERADMIN_USERNAME {
            return Err(PatrimoineError::InvalidRequest(
                "the root account cannot be deleted".into(),
            ));
        }
        let before = self.file.users.len();
        self.file.users.retain(|u| u.id != id);
        if self.file.users.len() == before {
            return Err(PatrimoineError::NotFound(id.to_string()));
        }
        self.persist().await
    }

    async fn persist(&self) -> Result<(), PatrimoineError> {
        let blob = serde_json::to_string(&self.file)?;
        self.store.save(collections::USERS, &blob).await
    }
}
