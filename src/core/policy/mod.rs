// src/core/policy/mod.rs

//! Pure, stateless authorization: section gating and the per-role
//! capability table. The engine never touches storage; callers check
//! before mutating.

mod engine;

pub use engine::{Action, Scope, can_access_section, default_sections, has_permission};
