//! Firestore document store integration for Registrify
//!
//! This crate wraps the Firestore REST API's `createDocument` operation:
//! one write per registration into a fixed collection, with the document
//! identifier and creation timestamp assigned by the server. There is no
//! read, update or delete path; persisted registrations are immutable.

pub mod client;
pub mod error;
pub mod logic;
pub mod service;

pub use client::FirestoreClient;
pub use error::FirestoreError;
pub use service::FirestoreRegistrationStore;
