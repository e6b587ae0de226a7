// --- File: crates/registrify_registration/src/error.rs ---

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use registrify_common::HttpStatusCode;
use serde_json::json;
use thiserror::Error;

/// Errors from the registration workflow.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Submission failed validation; the map holds the derived field errors.
    #[error("Validation failed")]
    Invalid(BTreeMap<String, String>),

    /// A submission for the same attendee is already being processed.
    #[error("A submission for this attendee is already in progress")]
    InFlight,

    /// The attendee already has an open payment dialog.
    #[error("A payment for this attendee is already pending")]
    DuplicatePending,

    /// The registration store is not configured.
    #[error("Registration store is not available")]
    StoreUnavailable,

    /// Payment was requested but no gateway is configured.
    #[error("Payment gateway is not available")]
    GatewayUnavailable,

    /// The gateway rejected or failed the order-creation call.
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// Callback named an order with no pending registration.
    #[error("No pending registration for order {0}")]
    UnknownOrder(String),

    /// Callback signature did not verify.
    #[error("Payment signature verification failed")]
    SignatureRejected,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpStatusCode for RegistrationError {
    fn status_code(&self) -> u16 {
        match self {
            RegistrationError::Invalid(_) => 422,
            RegistrationError::InFlight => 409,
            RegistrationError::DuplicatePending => 409,
            RegistrationError::StoreUnavailable => 503,
            RegistrationError::GatewayUnavailable => 503,
            RegistrationError::Gateway(_) => 502,
            RegistrationError::UnknownOrder(_) => 404,
            RegistrationError::SignatureRejected => 401,
            RegistrationError::Internal(_) => 500,
        }
    }
}

impl RegistrationError {
    /// Stable machine-readable code for the response body.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistrationError::Invalid(_) => "VALIDATION_FAILED",
            RegistrationError::InFlight => "SUBMISSION_IN_FLIGHT",
            RegistrationError::DuplicatePending => "PAYMENT_PENDING",
            RegistrationError::StoreUnavailable => "STORE_UNAVAILABLE",
            RegistrationError::GatewayUnavailable => "GATEWAY_UNAVAILABLE",
            RegistrationError::Gateway(_) => "GATEWAY_ERROR",
            RegistrationError::UnknownOrder(_) => "UNKNOWN_ORDER",
            RegistrationError::SignatureRejected => "SIGNATURE_REJECTED",
            RegistrationError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match &self {
            RegistrationError::Invalid(errors) => json!({ "errors": errors }),
            other => json!({
                "error": {
                    "message": other.to_string(),
                    "code": other.error_code(),
                }
            }),
        };
        (status, Json(body)).into_response()
    }
}
