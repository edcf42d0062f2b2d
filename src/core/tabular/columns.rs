// src/core/tabular/columns.rs

//! The fixed column sets of the two export shapes. Import matches headers
//! against these names case-sensitively; unrecognized columns are ignored.

pub const ASSET_COLUMNS: [&str; 21] = [
    "ID",
    "Reference",
    "MinistryID",
    "Type",
    "Condition",
    "Value",
    "AcquisitionDate",
    "Wilaya",
    "Location",
    "Lat",
    "Lng",
    "Description",
    "Spec_Brand",
    "Spec_Model",
    "Spec_Plate",
    "Spec_Surface",
    "Spec_Serial",
    "Spec_Material",
    "Spec_Dimensions",
    "Spec_Manufacturer",
    "Spec_Warranty",
];

pub const CONTACT_COLUMNS: [&str; 8] = [
    "ID",
    "MinistryFR",
    "MinistryAR",
    "Representative",
    "Phone",
    "Email",
    "RoleFR",
    "Status",
];
