// --- File: crates/registrify_firestore/src/client.rs ---
//! HTTP client for the Firestore REST API.

use registrify_common::models::{PersistedRegistration, Registration};
use registrify_common::HTTP_CLIENT;
use registrify_config::FirestoreConfig;
use tracing::{error, info};

use crate::error::FirestoreError;
use crate::logic::{
    document_id_from_name, registration_document_body, FirestoreDocument, FirestoreErrorBody,
};

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Client for a single Firestore database.
///
/// Addresses the store with the project's web API key, like the original
/// browser client, rather than a service account. The key is read from the
/// `FIRESTORE_API_KEY` env var at call time.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    config: FirestoreConfig,
    base_url: String,
}

impl FirestoreClient {
    /// Create a client against the production Firestore endpoint.
    pub fn new(config: FirestoreConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint. Used by tests and the
    /// Firestore emulator.
    pub fn with_base_url(config: FirestoreConfig, base_url: impl Into<String>) -> Self {
        Self {
            config,
            base_url: base_url.into(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            self.base_url, self.config.project_id, self.config.database_id, self.config.collection
        )
    }

    /// Write one registration document to the configured collection.
    ///
    /// Firestore generates the document id and assigns `createTime`; both
    /// are returned in the receipt.
    pub async fn create_registration(
        &self,
        record: &Registration,
    ) -> Result<PersistedRegistration, FirestoreError> {
        registrify_config::ensure_dotenv_loaded();
        let api_key =
            std::env::var("FIRESTORE_API_KEY").map_err(|_| FirestoreError::ConfigError)?;

        let body = registration_document_body(record);
        let response = HTTP_CLIENT
            .post(self.documents_url())
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<FirestoreErrorBody>(&body_text) {
                Ok(err_body) => err_body
                    .error
                    .map(|detail| detail.message)
                    .unwrap_or(body_text),
                Err(_) => body_text,
            };
            error!("Firestore write failed with status {}: {}", status, message);
            return Err(FirestoreError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let document: FirestoreDocument = serde_json::from_str(&body_text)?;
        let document_id = document_id_from_name(&document.name)?;
        info!("Registration document created: {}", document_id);

        Ok(PersistedRegistration {
            document_id,
            created_at: document.create_time,
        })
    }
}
