// src/core/catalog/details.rs

//! Category-specific asset attributes, modeled as a tagged union rather
//! than an open string map: only the fields of the active category can be
//! populated, by construction.

use crate::core::catalog::asset::AssetType;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum FuelType {
    Diesel,
    Petrol,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Transmission {
    Manual,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum DeviceType {
    Laptop,
    Desktop,
    Server,
    Printer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<Transmission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_cv: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealEstateDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadastral_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_supply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_freq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
}

/// The per-category attribute set. The variant IS the asset's category;
/// see [`SpecificDetails::kind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpecificDetails {
    RealEstate(RealEstateDetails),
    Vehicle(VehicleDetails),
    #[serde(rename = "IT")]
    It(ItDetails),
    Furniture(FurnitureDetails),
    Equipment(EquipmentDetails),
}

impl Default for SpecificDetails {
    fn default() -> Self {
        SpecificDetails::RealEstate(RealEstateDetails::default())
    }
}

impl SpecificDetails {
    pub fn kind(&self) -> AssetType {
        match self {
            SpecificDetails::RealEstate(_) => AssetType::RealEstate,
            SpecificDetails::Vehicle(_) => AssetType::Vehicle,
            SpecificDetails::It(_) => AssetType::It,
            SpecificDetails::Furniture(_) => AssetType::Furniture,
            SpecificDetails::Equipment(_) => AssetType::Equipment,
        }
    }

    /// A blank attribute set for the given category.
    pub fn empty_for(kind: AssetType) -> Self {
        match kind {
            AssetType::RealEstate => SpecificDetails::RealEstate(RealEstateDetails::default()),
            AssetType::Vehicle => SpecificDetails::Vehicle(VehicleDetails::default()),
            AssetType::It => SpecificDetails::It(ItDetails::default()),
            AssetType::Furniture => SpecificDetails::Furniture(FurnitureDetails::default()),
            AssetType::Equipment => SpecificDetails::Equipment(EquipmentDetails::default()),
        }
    }

    /// True when no field of the active variant is populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty_for(self.kind())
    }

    // Accessors for the flattened columns of the tabular export. Each
    // returns a value only when the active category carries that field.

    pub fn brand(&self) -> Option<&str> {
        match self {
            SpecificDetails::Vehicle(d) => d.brand.as_deref(),
            SpecificDetails::It(d) => d.brand.as_deref(),
            _ => None,
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            SpecificDetails::Vehicle(d) => d.model.as_deref(),
            SpecificDetails::It(d) => d.model.as_deref(),
            SpecificDetails::Equipment(d) => d.model.as_deref(),
            _ => None,
        }
    }

    pub fn plate_number(&self) -> Option<&str> {
        match self {
            SpecificDetails::Vehicle(d) => d.plate_number.as_deref(),
            _ => None,
        }
    }

    pub fn surface_area(&self) -> Option<f64> {
        match self {
            SpecificDetails::RealEstate(d) => d.surface_area,
            _ => None,
        }
    }

    pub fn serial_number(&self) -> Option<&str> {
        match self {
            SpecificDetails::It(d) => d.serial_number.as_deref(),
            _ => None,
        }
    }

    pub fn land_title(&self) -> Option<&str> {
        match self {
            SpecificDetails::RealEstate(d) => d.land_title.as_deref(),
            _ => None,
        }
    }

    pub fn material(&self) -> Option<&str> {
        match self {
            SpecificDetails::Furniture(d) => d.material.as_deref(),
            _ => None,
        }
    }

    pub fn dimensions(&self) -> Option<&str> {
        match self {
            SpecificDetails::Furniture(d) => d.dimensions.as_deref(),
            _ => None,
        }
    }

    pub fn manufacturer(&self) -> Option<&str> {
        match self {
            SpecificDetails::Equipment(d) => d.manufacturer.as_deref(),
            _ => None,
        }
    }

    pub fn warranty(&self) -> Option<&str> {
        match self {
            SpecificDetails::Equipment(d) => d.warranty.as_deref(),
            _ => None,
        }
    }
}
