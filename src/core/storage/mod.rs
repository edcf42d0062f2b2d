// src/core/storage/mod.rs

//! Snapshot persistence for the registry's collections.
//!
//! Every collection is a single JSON blob stored under a versioned name.
//! There are no partial writes and no transactions across collections:
//! a mutation rewrites its whole collection, and two concurrent writers
//! produce a last-write-wins overwrite by design.

mod file;
mod memory;
mod store;

pub use file::FileRecordStore;
pub use memory::MemoryRecordStore;
pub use store::RecordStore;

/// The versioned collection names understood by the rest of the crate.
pub mod collections {
    pub const USERS: &str = "users_v1";
    pub const ASSETS: &str = "assets_v1";
    pub const CONTACTS: &str = "contacts_v1";
    pub const GROUPS: &str = "groups_v1";
    pub const TEXTS: &str = "texts_v1";
    pub const SHEET_URL: &str = "sheet_url_v1";
}
