// src/core/tabular/parser.rs

use crate::core::PatrimoineError;
use crate::core::catalog::asset::{
    AssetCondition, AssetDeclaration, AssetType, GpsPoint, Wilaya,
};
use crate::core::catalog::details::{
    EquipmentDetails, FurnitureDetails, ItDetails, RealEstateDetails, SpecificDetails,
    VehicleDetails,
};
use crate::core::catalog::valuation;
use crate::core::contacts::{Bilingual, ComplianceStatus, MinistryContact};
use crate::core::ids::new_id;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::str::FromStr;

/// A parsed data row, keyed by the header names in file order.
pub type Row = IndexMap<String, String>;

/// Splits one record line into fields. A comma delimits only outside an
/// open quoted span; `""` inside a quoted span is a literal quote. An
/// unterminated quote makes the whole file invalid.
fn split_record(line: &str) -> Result<Vec<String>, PatrimoineError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                ',' => fields.push(std::mem::take(&mut current)),
                '"' if current.is_empty() => in_quotes = true,
                _ => current.push(c),
            }
        }
    }
    if in_quotes {
        return Err(PatrimoineError::ParseFailure);
    }
    fields.push(current);
    Ok(fields)
}

/// Parses a whole tabular file. The first non-empty line is the header row
/// and names the keys of every following row; short rows pad the missing
/// trailing columns with empty strings, and columns beyond the header are
/// dropped.
pub fn parse(text: &str) -> Result<Vec<Row>, PatrimoineError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect();
    let Some((header_line, data_lines)) = lines.split_first() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = split_record(header_line)?
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::with_capacity(data_lines.len());
    for line in data_lines {
        let values = split_record(line)?;
        let mut row = Row::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            row.insert(header.clone(), values.get(index).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn field<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}

fn non_empty(row: &Row, key: &str) -> Option<String> {
    let value = field(row, key).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn first_non_empty(row: &Row, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| non_empty(row, key))
}

/// Maps parsed rows to ministry contacts. Header matching accepts the
/// aliases the import dialog has historically produced (`NameFR`/`Nom`,
/// `NameAR`/`NomAR`) as well as this crate's own export headers. Imported
/// ministries always start as pending.
pub fn contacts_from_rows(rows: &[Row]) -> Vec<MinistryContact> {
    rows.iter()
        .map(|row| MinistryContact {
            id: non_empty(row, "ID").unwrap_or_else(|| new_id("imported")),
            name: Bilingual::new(
                first_non_empty(row, &["NameFR", "Nom", "MinistryFR"])
                    .unwrap_or_else(|| "Unknown".to_string()),
                first_non_empty(row, &["NameAR", "NomAR", "MinistryAR"])
                    .unwrap_or_else(|| "Unknown".to_string()),
            ),
            department: Bilingual::new(
                non_empty(row, "Department").unwrap_or_else(|| "Direction".to_string()),
                non_empty(row, "DepartmentAR").unwrap_or_else(|| "Direction".to_string()),
            ),
            representative: non_empty(row, "Representative")
                .unwrap_or_else(|| "Unknown".to_string()),
            role: Bilingual::new("Point Focal", "نقطة اتصال"),
            phone: non_empty(row, "Phone").unwrap_or_default(),
            email: non_empty(row, "Email").unwrap_or_default(),
            compliance_status: ComplianceStatus::Pending,
            last_submission: None,
        })
        .collect()
}

/// Maps parsed rows back into asset declarations. Only the recognized
/// asset columns are read (case-sensitively); anything else in the file is
/// ignored. `current_value` is recomputed as of `as_of` rather than
/// trusted from the file.
pub fn assets_from_rows(
    rows: &[Row],
    as_of: NaiveDate,
) -> Result<Vec<AssetDeclaration>, PatrimoineError> {
    rows.iter().map(|row| asset_from_row(row, as_of)).collect()
}

fn asset_from_row(row: &Row, as_of: NaiveDate) -> Result<AssetDeclaration, PatrimoineError> {
    let kind = AssetType::from_str(field(row, "Type").trim())
        .map_err(|_| PatrimoineError::ParseFailure)?;
    let condition = match non_empty(row, "Condition") {
        Some(raw) => AssetCondition::from_str(&raw).map_err(|_| PatrimoineError::ParseFailure)?,
        None => AssetCondition::default(),
    };
    let wilaya = match non_empty(row, "Wilaya") {
        Some(raw) => Wilaya::from_str(&raw).map_err(|_| PatrimoineError::ParseFailure)?,
        None => Wilaya::default(),
    };
    let value = match non_empty(row, "Value") {
        Some(raw) => raw.parse::<f64>().map_err(|_| PatrimoineError::ParseFailure)?,
        None => 0.0,
    };
    let acquisition_date = match non_empty(row, "AcquisitionDate") {
        Some(raw) => {
            NaiveDate::from_str(&raw).map_err(|_| PatrimoineError::ParseFailure)?
        }
        None => as_of,
    };
    let coordinates = match (parse_coord(row, "Lat")?, parse_coord(row, "Lng")?) {
        (Some(lat), Some(lng)) => Some(GpsPoint { lat, lng }),
        _ => None,
    };

    let specific = specific_from_row(row, kind)?;
    let current_value = valuation::depreciated_value(value, acquisition_date, kind, as_of);

    Ok(AssetDeclaration {
        id: non_empty(row, "ID").unwrap_or_else(|| new_id("ast")),
        reference: non_empty(row, "Reference").unwrap_or_default(),
        ministry_id: non_empty(row, "MinistryID").unwrap_or_default(),
        sub_entity: None,
        condition,
        description: field(row, "Description").to_string(),
        acquisition_date,
        value,
        current_value,
        wilaya,
        coordinates,
        location_details: field(row, "Location").to_string(),
        documents: Vec::new(),
        specific,
    })
}

fn parse_coord(row: &Row, key: &str) -> Result<Option<f64>, PatrimoineError> {
    match non_empty(row, key) {
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| PatrimoineError::ParseFailure),
        None => Ok(None),
    }
}

/// Rebuilds the tagged attribute set from the flattened `Spec_` columns of
/// the export shape. Columns that do not belong to the category are left
/// alone; the variant cannot hold them.
fn specific_from_row(row: &Row, kind: AssetType) -> Result<SpecificDetails, PatrimoineError> {
    let specific = match kind {
        AssetType::Vehicle => SpecificDetails::Vehicle(VehicleDetails {
            brand: non_empty(row, "Spec_Brand"),
            model: non_empty(row, "Spec_Model"),
            plate_number: non_empty(row, "Spec_Plate"),
            ..VehicleDetails::default()
        }),
        AssetType::RealEstate => SpecificDetails::RealEstate(RealEstateDetails {
            surface_area: match non_empty(row, "Spec_Surface") {
                Some(raw) => Some(
                    raw.parse::<f64>()
                        .map_err(|_| PatrimoineError::ParseFailure)?,
                ),
                None => None,
            },
            ..RealEstateDetails::default()
        }),
        AssetType::It => SpecificDetails::It(ItDetails {
            brand: non_empty(row, "Spec_Brand"),
            model: non_empty(row, "Spec_Model"),
            serial_number: non_empty(row, "Spec_Serial"),
            ..ItDetails::default()
        }),
        AssetType::Furniture => SpecificDetails::Furniture(FurnitureDetails {
            material: non_empty(row, "Spec_Material"),
            dimensions: non_empty(row, "Spec_Dimensions"),
            ..FurnitureDetails::default()
        }),
        AssetType::Equipment => SpecificDetails::Equipment(EquipmentDetails {
            manufacturer: non_empty(row, "Spec_Manufacturer"),
            model: non_empty(row, "Spec_Model"),
            warranty: non_empty(row, "Spec_Warranty"),
            ..EquipmentDetails::default()
        }),
    };
    Ok(specific)
}
