// --- File: crates/registrify_firestore/src/service.rs ---
use registrify_common::models::{PersistedRegistration, Registration};
use registrify_common::services::{BoxedError, BoxFuture, RegistrationStore};
use registrify_config::FirestoreConfig;

use crate::client::FirestoreClient;

/// Firestore-backed registration store.
pub struct FirestoreRegistrationStore {
    client: FirestoreClient,
}

impl FirestoreRegistrationStore {
    /// Create a new Firestore registration store.
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            client: FirestoreClient::new(config),
        }
    }

    /// Create a store over an existing client. Lets tests point the store
    /// at a mock endpoint.
    pub fn from_client(client: FirestoreClient) -> Self {
        Self { client }
    }
}

impl RegistrationStore for FirestoreRegistrationStore {
    type Error = BoxedError;

    fn save_registration(
        &self,
        record: Registration,
    ) -> BoxFuture<'_, PersistedRegistration, Self::Error> {
        Box::pin(async move {
            self.client
                .create_registration(&record)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}
