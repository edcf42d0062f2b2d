// src/core/catalog/validation.rs

//! Multi-step submission validation. Failures are per-field boolean flags
//! surfaced inline by the form layer; they block step advancement and are
//! fully recoverable by correction.

use crate::core::catalog::asset::AssetDraft;
use serde::{Deserialize, Serialize};

/// The three gated steps of the declaration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStep {
    Identification,
    Valuation,
    Evidence,
}

/// One flag per gated field; `true` means the field failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub reference: bool,
    pub acquisition_date: bool,
    pub ministry: bool,
    pub value: bool,
    pub location_details: bool,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        *self == FieldErrors::default()
    }
}

/// Validates a single step in isolation. `global_actor` is true for
/// SuperAdmin/DeputyAdmin callers, who must name an owner ministry (either
/// an existing one or a manual bilingual name); ministry-scoped actors
/// inherit their own.
pub fn validate_step(draft: &AssetDraft, step: SubmissionStep, global_actor: bool) -> FieldErrors {
    let mut errors = FieldErrors::default();
    match step {
        SubmissionStep::Identification => {
            if draft.reference.trim().is_empty() {
                errors.reference = true;
            }
            if draft.acquisition_date.is_none() {
                errors.acquisition_date = true;
            }
            if global_actor {
                match &draft.manual_ministry {
                    Some(name) => {
                        if name.fr.trim().is_empty() && name.ar.trim().is_empty() {
                            errors.ministry = true;
                        }
                    }
                    None => {
                        if draft.ministry_id.as_deref().unwrap_or("").is_empty() {
                            errors.ministry = true;
                        }
                    }
                }
            }
        }
        SubmissionStep::Valuation => {
            if !(draft.value > 0.0) {
                errors.value = true;
            }
            if draft.location_details.trim().is_empty() {
                errors.location_details = true;
            }
        }
        // Photos and documents are optional; the evidence step has no hard
        // validation.
        SubmissionStep::Evidence => {}
    }
    errors
}
