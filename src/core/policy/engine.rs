// src/core/policy/engine.rs

use crate::core::directory::user::{Role, Section, User};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// A mutating (or restricted-read) action a caller may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
    ViewUsers,
}

/// How far a capability reaches for a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Granted everywhere, across ministries.
    Always,
    /// Granted only when the acting user and the record share a ministry.
    OwnMinistry,
    Never,
}

#[derive(Debug, Clone, Copy)]
struct Capability {
    edit: Scope,
    delete: Scope,
    view_users: Scope,
}

/// The declarative capability table. Permission is deliberately NOT modeled
/// as inherited tiers: DeputyAdmin edits globally but never manages users,
/// while MinistryAdmin is ministry-scoped. The table is validated against
/// the full role enum on first use, so a newly added role cannot fall
/// through to an accidental default.
static CAPABILITIES: Lazy<HashMap<Role, Capability>> = Lazy::new(|| {
    let table = HashMap::from([
        (
            Role::SuperAdmin,
            Capability {
                edit: Scope::Always,
                delete: Scope::Always,
                view_users: Scope::Always,
            },
        ),
        (
            Role::DeputyAdmin,
            Capability {
                edit: Scope::Always,
                delete: Scope::Always,
                view_users: Scope::Never,
            },
        ),
        (
            Role::MinistryAdmin,
            Capability {
                edit: Scope::OwnMinistry,
                delete: Scope::OwnMinistry,
                view_users: Scope::Never,
            },
        ),
        (
            Role::Editor,
            Capability {
                edit: Scope::OwnMinistry,
                delete: Scope::Never,
                view_users: Scope::Never,
            },
        ),
        (
            Role::Viewer,
            Capability {
                edit: Scope::Never,
                delete: Scope::Never,
                view_users: Scope::Never,
            },
        ),
    ]);
    for role in Role::iter() {
        assert!(
            table.contains_key(&role),
            "capability table is missing an entry for role {role}"
        );
    }
    table
});

/// Resolves whether `user` may perform `action` on a record owned by
/// `owner_ministry_id`. An `OwnMinistry` scope requires both sides to carry
/// a ministry id and to agree on it.
pub fn has_permission(user: &User, action: Action, owner_ministry_id: Option<&str>) -> bool {
    let capability = &CAPABILITIES[&user.role];
    let scope = match action {
        Action::Edit => capability.edit,
        Action::Delete => capability.delete,
        Action::ViewUsers => capability.view_users,
    };
    match scope {
        Scope::Always => true,
        Scope::Never => false,
        Scope::OwnMinistry => match (owner_ministry_id, user.ministry_id.as_deref()) {
            (Some(owner), Some(own)) => owner == own,
            _ => false,
        },
    }
}

/// Section gate. The user-management and assistant sections are hard rules
/// independent of stored `allowed_tabs`, so stale or tampered persisted
/// state cannot open them.
pub fn can_access_section(user: &User, section: Section) -> bool {
    if user.role == Role::SuperAdmin {
        return true;
    }
    if matches!(section, Section::Users | Section::Assistant) {
        return false;
    }
    user.allowed_tabs.contains(&section)
}

/// The provisioning section set for a role, used when creating or
/// resetting a user.
pub fn default_sections(role: Role) -> Vec<Section> {
    match role {
        Role::SuperAdmin => Section::iter().collect(),
        Role::DeputyAdmin => vec![
            Section::Dashboard,
            Section::Directory,
            Section::Declaration,
            Section::Map,
        ],
        Role::MinistryAdmin => vec![Section::Dashboard, Section::Declaration],
        Role::Editor => vec![Section::Dashboard, Section::Declaration],
        Role::Viewer => vec![Section::Dashboard, Section::Map],
    }
}
