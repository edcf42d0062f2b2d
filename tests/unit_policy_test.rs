use patrimoine::core::directory::{Role, Section, User};
use patrimoine::core::policy::{Action, can_access_section, default_sections, has_permission};
use strum::IntoEnumIterator;

fn user(role: Role, ministry_id: Option<&str>) -> User {
    User {
        id: "u1".to_string(),
        username: "tester".to_string(),
        password_hash: String::new(),
        full_name: "Tester".to_string(),
        role,
        ministry_id: ministry_id.map(str::to_string),
        allowed_tabs: default_sections(role),
    }
}

/// Expected verdicts for every (role, action, ownership) combination.
/// Ownership legend: `same` = record owned by the user's ministry,
/// `other` = a different ministry, `none` = no owner ministry supplied.
#[tokio::test]
async fn permission_table_is_exhaustive() {
    use Action::*;
    use Role::*;

    // (role, action, same, other, none)
    let table = [
        (SuperAdmin, Edit, true, true, true),
        (SuperAdmin, Delete, true, true, true),
        (SuperAdmin, ViewUsers, true, true, true),
        (DeputyAdmin, Edit, true, true, true),
        (DeputyAdmin, Delete, true, true, true),
        (DeputyAdmin, ViewUsers, false, false, false),
        (MinistryAdmin, Edit, true, false, false),
        (MinistryAdmin, Delete, true, false, false),
        (MinistryAdmin, ViewUsers, false, false, false),
        (Editor, Edit, true, false, false),
        (Editor, Delete, false, false, false),
        (Editor, ViewUsers, false, false, false),
        (Viewer, Edit, false, false, false),
        (Viewer, Delete, false, false, false),
        (Viewer, ViewUsers, false, false, false),
    ];
    assert_eq!(table.len(), Role::iter().count() * 3);

    for (role, action, same, other, none) in table {
        let actor = user(role, Some("min-a"));
        assert_eq!(
            has_permission(&actor, action, Some("min-a")),
            same,
            "{role:?} {action:?} on own ministry"
        );
        assert_eq!(
            has_permission(&actor, action, Some("min-b")),
            other,
            "{role:?} {action:?} on another ministry"
        );
        assert_eq!(
            has_permission(&actor, action, None),
            none,
            "{role:?} {action:?} with no owner"
        );
    }
}

#[tokio::test]
async fn ministry_scope_requires_both_sides() {
    // A ministry-scoped user without a ministry id gets nothing, even when
    // the record has no owner either.
    let unscoped = user(Role::MinistryAdmin, None);
    assert!(!has_permission(&unscoped, Action::Edit, None));
    assert!(!has_permission(&unscoped, Action::Edit, Some("min-a")));
}

#[tokio::test]
async fn view_users_is_super_admin_only() {
    for role in Role::iter() {
        let expected = role == Role::SuperAdmin;
        assert_eq!(
            has_permission(&user(role, Some("min-a")), Action::ViewUsers, None),
            expected
        );
    }
}

#[tokio::test]
async fn assistant_section_is_hard_gated() {
    for role in Role::iter() {
        // Even a tampered record listing the assistant tab does not open it.
        let mut actor = user(role, None);
        actor.allowed_tabs = vec![Section::Assistant];
        assert_eq!(
            can_access_section(&actor, Section::Assistant),
            role == Role::SuperAdmin,
            "{role:?}"
        );
    }
}

#[tokio::test]
async fn users_section_is_never_tab_driven() {
    for role in Role::iter() {
        let mut actor = user(role, None);
        actor.allowed_tabs = vec![Section::Users];
        assert_eq!(
            can_access_section(&actor, Section::Users),
            role == Role::SuperAdmin
        );
    }
}

#[tokio::test]
async fn sections_follow_allowed_tabs_otherwise() {
    let mut viewer = user(Role::Viewer, None);
    viewer.allowed_tabs = vec![Section::Dashboard, Section::Map];
    assert!(can_access_section(&viewer, Section::Dashboard));
    assert!(can_access_section(&viewer, Section::Map));
    assert!(!can_access_section(&viewer, Section::Declaration));
    assert!(!can_access_section(&viewer, Section::Directory));
}

#[tokio::test]
async fn super_admin_ignores_tab_list() {
    let mut admin = user(Role::SuperAdmin, None);
    admin.allowed_tabs = Vec::new();
    for section in Section::iter() {
        assert!(can_access_section(&admin, section));
    }
}

#[tokio::test]
async fn default_section_sets_per_role() {
    assert_eq!(
        default_sections(Role::SuperAdmin),
        Section::iter().collect::<Vec<_>>()
    );
    assert_eq!(
        default_sections(Role::DeputyAdmin),
        vec![
            Section::Dashboard,
            Section::Directory,
            Section::Declaration,
            Section::Map
        ]
    );
    assert_eq!(
        default_sections(Role::MinistryAdmin),
        vec![Section::Dashboard, Section::Declaration]
    );
    assert_eq!(
        default_sections(Role::Editor),
        vec![Section::Dashboard, Section::Declaration]
    );
    assert_eq!(
        default_sections(Role::Viewer),
        vec![Section::Dashboard, Section::Map]
    );
}
