// --- File: crates/registrify_registration/src/lib.rs ---
//! Registration form workflow for Registrify.
//!
//! The pipeline for one submission: validate the raw field values, then
//! either persist the record directly or open a payment order and hold the
//! record pending until the checkout widget's callback verifies. The HTTP
//! surface is three routes under /api: submit, payment callback, and
//! cancellation of a pending payment.

pub mod doc;
pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod submission;
pub mod validation;

// Re-export for main backend
pub use error::RegistrationError;
pub use handlers::RegistrationState;
pub use models::{PaymentCallbackRequest, RegistrationRequest, SubmitOutcome};
pub use routes::routes;
pub use submission::SubmissionCoordinator;
