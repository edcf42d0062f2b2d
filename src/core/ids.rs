// src/core/ids.rs

//! Client-side id generation. Every entity receives its id at submission
//! time, before it ever reaches storage.

use uuid::Uuid;

/// Returns a fresh id of the form `<prefix>-<uuid4>`, e.g. `ast-1c9b...`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
