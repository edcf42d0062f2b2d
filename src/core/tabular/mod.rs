// src/core/tabular/mod.rs

//! Quote-aware CSV serialization and parsing, used to move asset and
//! contact records in and out of the registry.
//!
//! Serialization uses a fixed column order per entity kind; every textual
//! field is wrapped in quotes with internal quotes doubled, while ids and
//! numerics stay bare. Parsing is a quote-aware scan: a comma only delimits
//! outside an open quoted span, and a doubled quote inside one is a literal
//! quote character. Malformed input surfaces as the single generic
//! [`crate::core::PatrimoineError::ParseFailure`]; there is no partial-row recovery.

pub mod columns;
mod parser;
mod writer;

pub use parser::{Row, assets_from_rows, contacts_from_rows, parse};
pub use writer::{assets_to_csv, contacts_to_csv, export_file_name};
