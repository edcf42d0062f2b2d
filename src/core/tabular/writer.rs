// src/core/tabular/writer.rs

use crate::core::catalog::asset::AssetDeclaration;
use crate::core::contacts::MinistryContact;
use crate::core::tabular::columns::{ASSET_COLUMNS, CONTACT_COLUMNS};
use chrono::NaiveDate;

/// Wraps a textual field in quotes, doubling any embedded quote.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Numbers print without a trailing `.0` when they are whole, the way the
/// export has always looked.
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn optional_str(value: Option<&str>) -> String {
    quoted(value.unwrap_or(""))
}

fn optional_number(value: Option<f64>) -> String {
    quoted(&value.map(number).unwrap_or_default())
}

/// Serializes asset declarations in the fixed asset column order.
pub fn assets_to_csv(assets: &[AssetDeclaration]) -> String {
    let mut lines = Vec::with_capacity(assets.len() + 1);
    lines.push(ASSET_COLUMNS.join(","));
    for asset in assets {
        let specific = &asset.specific;
        let row = [
            asset.id.clone(),
            quoted(&asset.reference),
            asset.ministry_id.clone(),
            asset.kind().to_string(),
            asset.condition.to_string(),
            number(asset.value),
            asset.acquisition_date.to_string(),
            asset.wilaya.to_string(),
            quoted(&asset.location_details),
            asset.coordinates.map(|c| c.lat.to_string()).unwrap_or_default(),
            asset.coordinates.map(|c| c.lng.to_string()).unwrap_or_default(),
            quoted(&asset.description),
            optional_str(specific.brand()),
            optional_str(specific.model()),
            optional_str(specific.plate_number()),
            optional_number(specific.surface_area()),
            optional_str(specific.serial_number()),
            optional_str(specific.material()),
            optional_str(specific.dimensions()),
            optional_str(specific.manufacturer()),
            optional_str(specific.warranty()),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Serializes ministry contacts in the fixed contact column order.
pub fn contacts_to_csv(contacts: &[MinistryContact]) -> String {
    let mut lines = Vec::with_capacity(contacts.len() + 1);
    lines.push(CONTACT_COLUMNS.join(","));
    for contact in contacts {
        let row = [
            contact.id.clone(),
            quoted(&contact.name.fr),
            quoted(&contact.name.ar),
            quoted(&contact.representative),
            quoted(&contact.phone),
            quoted(&contact.email),
            quoted(&contact.role.fr),
            contact.compliance_status.to_string(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Export filenames carry an ISO date stamp:
/// `patrimoine_biens_export_2024-06-01.csv`.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{date}.csv")
}
