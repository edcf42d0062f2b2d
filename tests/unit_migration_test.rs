use patrimoine::core::directory::migration::{
    DEPUTY_USERNAME, SUPERADMIN_USERNAME, heal, heal_record,
};
use patrimoine::core::directory::user::USERS_SCHEMA_VERSION;
use patrimoine::core::directory::{Role, Section, User, UsersFile};
use patrimoine::core::policy::default_sections;

fn stored_user(id: &str, role: Role, tabs: Vec<Section>) -> User {
    User {
        id: id.to_string(),
        username: id.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        full_name: id.to_string(),
        role,
        ministry_id: Some("1".to_string()),
        allowed_tabs: tabs,
    }
}

#[tokio::test]
async fn missing_seed_accounts_are_inserted() {
    let mut file = UsersFile::default();
    assert!(heal(&mut file).unwrap());

    let names: Vec<&str> = file.users.iter().map(|u| u.username.as_str()).collect();
    assert!(names.contains(&SUPERADMIN_USERNAME));
    assert!(names.contains(&DEPUTY_USERNAME));
    assert_eq!(file.schema_version, USERS_SCHEMA_VERSION);
}

#[tokio::test]
async fn healing_twice_changes_nothing() {
    let mut file = UsersFile {
        schema_version: 0,
        users: vec![
            stored_user(
                "legacy",
                Role::MinistryAdmin,
                vec![
                    Section::Dashboard,
                    Section::Directory,
                    Section::Map,
                    Section::Assistant,
                ],
            ),
            stored_user("viewer", Role::Viewer, vec![]),
        ],
    };

    assert!(heal(&mut file).unwrap());
    let after_first = serde_json::to_string(&file).unwrap();

    // Second pass: no mutation, no duplicate seeds.
    assert!(!heal(&mut file).unwrap());
    assert_eq!(serde_json::to_string(&file).unwrap(), after_first);
    assert_eq!(
        file.users
            .iter()
            .filter(|u| u.username == SUPERADMIN_USERNAME)
            .count(),
        1
    );
    assert_eq!(
        file.users
            .iter()
            .filter(|u| u.username == DEPUTY_USERNAME)
            .count(),
        1
    );
}

#[tokio::test]
async fn ministry_admin_tabs_are_forced_to_defaults() {
    let healed = heal_record(stored_user(
        "ma",
        Role::MinistryAdmin,
        vec![Section::Dashboard, Section::Directory, Section::Map],
    ));
    assert_eq!(healed.allowed_tabs, default_sections(Role::MinistryAdmin));
}

#[tokio::test]
async fn assistant_is_stripped_from_non_super_admins() {
    let healed = heal_record(stored_user(
        "dep",
        Role::DeputyAdmin,
        vec![Section::Dashboard, Section::Assistant, Section::Map],
    ));
    assert!(!healed.allowed_tabs.contains(&Section::Assistant));
    assert!(healed.allowed_tabs.contains(&Section::Dashboard));
    assert!(healed.allowed_tabs.contains(&Section::Map));
}

#[tokio::test]
async fn users_tab_never_survives_in_storage() {
    let healed = heal_record(stored_user(
        "v",
        Role::Viewer,
        vec![Section::Dashboard, Section::Users],
    ));
    assert!(!healed.allowed_tabs.contains(&Section::Users));
}

#[tokio::test]
async fn empty_tab_list_gets_role_defaults() {
    let healed = heal_record(stored_user("ed", Role::Editor, vec![]));
    assert_eq!(healed.allowed_tabs, default_sections(Role::Editor));
}

#[tokio::test]
async fn record_rules_are_idempotent_individually() {
    let once = heal_record(stored_user(
        "x",
        Role::MinistryAdmin,
        vec![Section::Assistant, Section::Users, Section::Dashboard],
    ));
    let twice = heal_record(once.clone());
    assert_eq!(once, twice);
}
