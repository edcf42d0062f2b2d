// src/core/catalog/asset.rs

use crate::core::catalog::details::SpecificDetails;
use crate::core::contacts::Bilingual;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The closed set of asset categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum AssetType {
    RealEstate,
    Vehicle,
    #[serde(rename = "IT")]
    #[strum(serialize = "IT")]
    It,
    Furniture,
    Equipment,
}

/// Technical condition of an asset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
pub enum AssetCondition {
    New,
    #[default]
    Good,
    NeedsRepair,
    Damaged,
    Obsolete,
}

/// Administrative regions (closed enum).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
pub enum Wilaya {
    Adrar,
    Assaba,
    Brakna,
    #[serde(rename = "Dakhlet Nouadhibou")]
    #[strum(serialize = "Dakhlet Nouadhibou")]
    DakhletNouadhibou,
    Gorgol,
    Guidimaka,
    #[serde(rename = "Hodh Ech Chargui")]
    #[strum(serialize = "Hodh Ech Chargui")]
    HodhEchChargui,
    #[serde(rename = "Hodh El Gharbi")]
    #[strum(serialize = "Hodh El Gharbi")]
    HodhElGharbi,
    Inchiri,
    #[serde(rename = "Nouakchott Nord")]
    #[strum(serialize = "Nouakchott Nord")]
    NouakchottNord,
    #[default]
    #[serde(rename = "Nouakchott Ouest")]
    #[strum(serialize = "Nouakchott Ouest")]
    NouakchottOuest,
    #[serde(rename = "Nouakchott Sud")]
    #[strum(serialize = "Nouakchott Sud")]
    NouakchottSud,
    Tagant,
    #[serde(rename = "Tiris Zemmour")]
    #[strum(serialize = "Tiris Zemmour")]
    TirisZemmour,
    Trarza,
}

/// GPS point attached to an asset; consumed by the map widget, which emits
/// nothing back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum DocumentKind {
    Photo,
    Invoice,
    Legal,
    Other,
}

/// A supporting document: the payload is the uploaded file as text
/// (base64 conversion happens upstream, outside this crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDocument {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    pub payload: String,
}

/// A declared state asset.
///
/// `current_value` is the depreciation snapshot taken at last save; reads
/// that care about freshness recompute it through
/// [`crate::core::catalog::valuation`]. The active variant of `specific`
/// carries the category, so an asset cannot hold attributes from a
/// category it does not belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDeclaration {
    pub id: String,
    pub reference: String,
    pub ministry_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_entity: Option<String>,
    pub condition: AssetCondition,
    #[serde(default)]
    pub description: String,
    pub acquisition_date: NaiveDate,
    pub value: f64,
    pub current_value: f64,
    pub wilaya: Wilaya,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GpsPoint>,
    #[serde(default)]
    pub location_details: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<AssetDocument>,
    pub specific: SpecificDetails,
}

impl AssetDeclaration {
    pub fn kind(&self) -> AssetType {
        self.specific.kind()
    }
}

/// A declaration being assembled through the multi-step submission flow.
#[derive(Debug, Clone, Default)]
pub struct AssetDraft {
    pub reference: String,
    /// Selected owner. Global-role actors must pick one (or enter a manual
    /// ministry); ministry-scoped actors inherit their own.
    pub ministry_id: Option<String>,
    /// Bilingual name of a ministry not yet in the directory; submitting
    /// creates the contact as a side effect.
    pub manual_ministry: Option<Bilingual>,
    pub sub_entity: Option<String>,
    pub condition: AssetCondition,
    pub description: String,
    pub acquisition_date: Option<NaiveDate>,
    pub value: f64,
    pub wilaya: Wilaya,
    pub coordinates: Option<GpsPoint>,
    pub location_details: String,
    pub documents: Vec<AssetDocument>,
    pub specific: SpecificDetails,
}

impl AssetDraft {
    pub fn kind(&self) -> AssetType {
        self.specific.kind()
    }

    /// Switches the asset category. Previously entered specific attributes
    /// are discarded so fields from the old category cannot be saved under
    /// the new one.
    pub fn set_kind(&mut self, kind: AssetType) {
        if self.kind() != kind {
            self.specific = SpecificDetails::empty_for(kind);
        }
    }
}
