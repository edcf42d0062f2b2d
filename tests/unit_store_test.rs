use patrimoine::core::storage::{FileRecordStore, MemoryRecordStore, RecordStore, collections};

#[tokio::test]
async fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRecordStore::open(dir.path()).await.unwrap();

    assert!(store.load(collections::ASSETS).await.unwrap().is_none());

    store.save(collections::ASSETS, "[1,2,3]").await.unwrap();
    assert_eq!(
        store.load(collections::ASSETS).await.unwrap().as_deref(),
        Some("[1,2,3]")
    );

    // A save replaces the whole blob.
    store.save(collections::ASSETS, "[]").await.unwrap();
    assert_eq!(
        store.load(collections::ASSETS).await.unwrap().as_deref(),
        Some("[]")
    );

    store.remove(collections::ASSETS).await.unwrap();
    assert!(store.load(collections::ASSETS).await.unwrap().is_none());
    // Removing again is not an error.
    store.remove(collections::ASSETS).await.unwrap();
}

#[tokio::test]
async fn file_store_keeps_collections_apart() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRecordStore::open(dir.path()).await.unwrap();

    store.save(collections::USERS, "\"users\"").await.unwrap();
    store.save(collections::CONTACTS, "\"contacts\"").await.unwrap();

    assert_eq!(
        store.load(collections::USERS).await.unwrap().as_deref(),
        Some("\"users\"")
    );
    assert_eq!(
        store.load(collections::CONTACTS).await.unwrap().as_deref(),
        Some("\"contacts\"")
    );
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileRecordStore::open(dir.path()).await.unwrap();
        store.save(collections::GROUPS, "[\"g1\"]").await.unwrap();
    }
    let store = FileRecordStore::open(dir.path()).await.unwrap();
    assert_eq!(
        store.load(collections::GROUPS).await.unwrap().as_deref(),
        Some("[\"g1\"]")
    );
}

#[tokio::test]
async fn memory_store_behaves_like_the_file_store() {
    let store = MemoryRecordStore::new();
    assert!(store.load("anything").await.unwrap().is_none());

    store.save("anything", "blob").await.unwrap();
    assert_eq!(store.load("anything").await.unwrap().as_deref(), Some("blob"));

    store.remove("anything").await.unwrap();
    assert!(store.load("anything").await.unwrap().is_none());
}

#[tokio::test]
async fn last_write_wins_between_two_handles() {
    // Two sessions against the same persisted collection: the accepted
    // lost-update behavior, not a bug.
    let dir = tempfile::tempdir().unwrap();
    let first = FileRecordStore::open(dir.path()).await.unwrap();
    let second = FileRecordStore::open(dir.path()).await.unwrap();

    first.save(collections::ASSETS, "[\"from-first\"]").await.unwrap();
    second.save(collections::ASSETS, "[\"from-second\"]").await.unwrap();

    assert_eq!(
        first.load(collections::ASSETS).await.unwrap().as_deref(),
        Some("[\"from-second\"]")
    );
}
