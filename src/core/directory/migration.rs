// src/core/directory/migration.rs

//! Idempotent self-healing applied to the user collection on every load.
//!
//! Each record rule is a pure `fn(User) -> User` applied in a fixed
//! pipeline; running the pass twice produces the same output as running it
//! once. The collection is only written back when something changed.

use crate::core::PatrimoineError;
use crate::core::directory::credentials::hash_password;
use crate::core::directory::user::{Role, Section, User, USERS_SCHEMA_VERSION, UsersFile};
use crate::core::policy;
use tracing::info;

/// Username (and fixed id) of the root account. It cannot be deleted.
pub const SUPERADMIN_USERNAME: &str = "superadmin";
/// Username (and fixed id) of the deputy-admin seed account.
pub const DEPUTY_USERNAME: &str = "adjoint";

const SUPERADMIN_DEFAULT_PASSWORD: &str = "superadmin123";
const DEPUTY_DEFAULT_PASSWORD: &str = "adjoint123";

/// The fixed record-rule pipeline. Order matters only in that tab-filling
/// runs before the strip rules; every rule is idempotent on its own.
const RECORD_RULES: &[fn(User) -> User] = &[
    fill_missing_tabs,
    force_ministry_admin_tabs,
    strip_assistant,
    strip_user_management,
];

/// Applies the full record pipeline to a single user.
pub fn heal_record(user: User) -> User {
    RECORD_RULES.iter().fold(user, |user, rule| rule(user))
}

/// Heals the whole collection in place. Returns whether anything changed,
/// so the caller knows whether a write-back is needed.
pub fn heal(file: &mut UsersFile) -> Result<bool, PatrimoineError> {
    let mut changed = false;

    for seed in [superadmin_seed()?, deputy_seed()?] {
        let present = file
            .users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&seed.username));
        if !present {
            info!("Seeding missing well-known account '{}'", seed.username);
            file.users.push(seed);
            changed = true;
        }
    }

    for user in &mut file.users {
        let healed = heal_record(user.clone());
        if *user != healed {
            *user = healed;
            changed = true;
        }
    }

    if file.schema_version != USERS_SCHEMA_VERSION {
        file.schema_version = USERS_SCHEMA_VERSION;
        changed = true;
    }

    Ok(changed)
}

/// A record with no tabs at all (legacy shape) gets the defaults for its role.
fn fill_missing_tabs(mut user: User) -> User {
    if user.allowed_tabs.is_empty() {
        user.allowed_tabs = policy::default_sections(user.role);
    }
    user
}

/// MinistryAdmin tabs are forced to the current role default regardless of
/// what was stored, so older provisioning sets cannot linger.
fn force_ministry_admin_tabs(mut user: User) -> User {
    if user.role == Role::MinistryAdmin {
        let defaults = policy::default_sections(Role::MinistryAdmin);
        if user.allowed_tabs != defaults {
            user.allowed_tabs = defaults;
        }
    }
    user
}

/// The assistant section is reserved for SuperAdmin.
fn strip_assistant(mut user: User) -> User {
    if user.role != Role::SuperAdmin {
        user.allowed_tabs.retain(|s| *s != Section::Assistant);
    }
    user
}

/// Stored tab lists never carry the user-management section; SuperAdmin
/// reaches it through the role bypass in the policy engine.
fn strip_user_management(mut user: User) -> User {
    user.allowed_tabs.retain(|s| *s != Section::Users);
    user
}

fn superadmin_seed() -> Result<User, PatrimoineError> {
    Ok(heal_record(User {
        id: SUPERADMIN_USERNAME.to_string(),
        username: SUPERADMIN_USERNAME.to_string(),
        password_hash: hash_password(SUPERADMIN_DEFAULT_PASSWORD)?,
        full_name: "Administrateur Général".to_string(),
        role: Role::SuperAdmin,
        ministry_id: None,
        allowed_tabs: policy::default_sections(Role::SuperAdmin),
    }))
}

fn deputy_seed() -> Result<User, PatrimoineError> {
    Ok(heal_record(User {
        id: DEPUTY_USERNAME.to_string(),
        username: DEPUTY_USERNAME.to_string(),
        password_hash: hash_password(DEPUTY_DEFAULT_PASSWORD)?,
        full_name: "Administrateur Adjoint".to_string(),
        role: Role::DeputyAdmin,
        ministry_id: None,
        allowed_tabs: policy::default_sections(Role::DeputyAdmin),
    }))
}
