// src/core/catalog/compliance.rs

//! Derived ministry compliance. Never stored authoritatively: the status
//! is recomputed from the age of the most recent declaration whenever it
//! is displayed or exported.

use crate::core::catalog::asset::AssetDeclaration;
use crate::core::contacts::ComplianceStatus;
use chrono::NaiveDate;

const OVERDUE_AFTER_DAYS: i64 = 180;
const PENDING_AFTER_DAYS: i64 = 90;

/// Status for a ministry given the acquisition date of its most recent
/// asset. No submission at all is overdue.
pub fn status_for(last_submission: Option<NaiveDate>, today: NaiveDate) -> ComplianceStatus {
    match last_submission {
        None => ComplianceStatus::Overdue,
        Some(last) => {
            let age_days = (today - last).num_days().abs();
            if age_days > OVERDUE_AFTER_DAYS {
                ComplianceStatus::Overdue
            } else if age_days > PENDING_AFTER_DAYS {
                ComplianceStatus::Pending
            } else {
                ComplianceStatus::Compliant
            }
        }
    }
}

/// Computes a ministry's status and last-submission date from the asset
/// collection.
pub fn ministry_compliance(
    assets: &[AssetDeclaration],
    ministry_id: &str,
    today: NaiveDate,
) -> (ComplianceStatus, Option<NaiveDate>) {
    let last = assets
        .iter()
        .filter(|a| a.ministry_id == ministry_id)
        .map(|a| a.acquisition_date)
        .max();
    (status_for(last, today), last)
}
