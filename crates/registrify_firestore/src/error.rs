// --- File: crates/registrify_firestore/src/error.rs ---
use registrify_common::HttpStatusCode;
use thiserror::Error;

/// Firestore-specific error types.
#[derive(Error, Debug)]
pub enum FirestoreError {
    /// Error occurred during a Firestore API request
    #[error("Firestore API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Firestore API
    #[error("Firestore API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Firestore API response
    #[error("Failed to parse Firestore API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Firestore configuration
    #[error("Firestore configuration missing or incomplete")]
    ConfigError,

    /// The store answered success but without a usable document name
    #[error("Firestore response missing document identifier")]
    MissingDocumentId,

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

impl HttpStatusCode for FirestoreError {
    fn status_code(&self) -> u16 {
        match self {
            FirestoreError::RequestError(_) => 500,
            FirestoreError::ApiError { status_code, .. } => *status_code,
            FirestoreError::ParseError(_) => 400,
            FirestoreError::ConfigError => 500,
            FirestoreError::MissingDocumentId => 502,
            FirestoreError::InternalError(_) => 500,
        }
    }
}
