// src/core/errors.rs

//! Defines the primary error type for the entire application.

use crate::core::catalog::validation::FieldErrors;
use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all possible failures within the registry.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug)]
pub enum PatrimoineError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("HTTP client error: {0}")]
    HttpClientError(String),

    /// Generic boundary failure for tabular files and backup envelopes. Malformed
    /// input is rejected wholesale; there is no partial-row recovery.
    #[error("Invalid import file")]
    ParseFailure,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("No record with id '{0}'")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Submission blocked by field validation: {0:?}")]
    Validation(FieldErrors),

    #[error("Internal Error: {0}")]
    Internal(String),
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for PatrimoineError {
    fn from(e: std::io::Error) -> Self {
        PatrimoineError::Io(Arc::new(e))
    }
}

impl From<reqwest::Error> for PatrimoineError {
    fn from(e: reqwest::Error) -> Self {
        PatrimoineError::HttpClientError(e.to_string())
    }
}

impl From<serde_json::Error> for PatrimoineError {
    fn from(e: serde_json::Error) -> Self {
        PatrimoineError::Internal(format!("JSON serialization/deserialization error: {e}"))
    }
}
