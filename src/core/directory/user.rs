// src/core/directory/user.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Schema version written into the persisted user collection. The
/// self-healing rules in [`super::migration`] still run unconditionally;
/// the version exists so future migrations can stop re-deriving "what
/// changed" from record shapes alone.
pub const USERS_SCHEMA_VERSION: u32 = 1;

/// Account roles, ordered by decreasing global authority. Authority is a
/// total order, but permissions are not tiered: the explicit capability
/// table in [`crate::core::policy`] is authoritative.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    DeputyAdmin,
    MinistryAdmin,
    Editor,
    Viewer,
}

impl Default for Role {
    fn default() -> Self {
        Role::Viewer
    }
}

/// A navigable section of the application, gated per user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Dashboard,
    Directory,
    Declaration,
    Map,
    Assistant,
    Users,
    Settings,
}

/// A single user account.
///
/// `allowed_tabs` is an ordered, explicit list of navigable sections. Stored
/// lists never contain [`Section::Users`], and never [`Section::Assistant`]
/// for a non-SuperAdmin; the invariant is enforced at write time and
/// re-checked on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Unique, trimmed, stored lowercase; matched case-insensitively.
    pub username: String,
    /// Argon2 password hash.
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    /// Ownership scope. Absent means global scope for the admin roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ministry_id: Option<String>,
    #[serde(default)]
    pub allowed_tabs: Vec<Section>,
}

impl User {
    pub fn is_global_admin(&self) -> bool {
        matches!(self.role, Role::SuperAdmin | Role::DeputyAdmin)
    }
}

/// On-disk shape of the user collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersFile {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub users: Vec<User>,
}
