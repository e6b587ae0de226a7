// --- File: crates/registrify_registration/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use registrify_config::AppConfig;

use crate::error::RegistrationError;
use crate::models::{CancelResponse, PaymentCallbackRequest, RegistrationRequest, SubmitOutcome};
use crate::submission::SubmissionCoordinator;

// --- State for Registration Handlers ---
#[derive(Clone)]
pub struct RegistrationState {
    pub config: Arc<AppConfig>,
    pub coordinator: Arc<SubmissionCoordinator>,
}

/// Axum handler for a registration submission.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/register", // Path relative to /api
    request_body = RegistrationRequest,
    responses(
        (status = 200, description = "Registered, or payment required with checkout options", body = SubmitOutcome),
        (status = 422, description = "Validation failed", body = crate::models::ValidationErrorResponse),
        (status = 409, description = "A submission or payment for this attendee is already open"),
        (status = 503, description = "Registration store or payment gateway not available")
    ),
    tag = "Registration"
))]
pub async fn register_handler(
    State(state): State<Arc<RegistrationState>>,
    Json(payload): Json<RegistrationRequest>,
) -> Result<Json<SubmitOutcome>, RegistrationError> {
    let outcome = state.coordinator.submit(payload).await?;
    Ok(Json(outcome))
}

/// Axum handler for the payment-completion callback posted by the
/// checkout widget's handler function.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/register/payment-callback", // Path relative to /api
    request_body = PaymentCallbackRequest,
    responses(
        (status = 200, description = "Payment verified and registration persisted", body = SubmitOutcome),
        (status = 401, description = "Signature verification failed"),
        (status = 404, description = "No pending registration for this order")
    ),
    tag = "Registration"
))]
pub async fn payment_callback_handler(
    State(state): State<Arc<RegistrationState>>,
    Json(payload): Json<PaymentCallbackRequest>,
) -> Result<Json<SubmitOutcome>, RegistrationError> {
    let outcome = state.coordinator.complete_payment(payload).await?;
    Ok(Json(outcome))
}

/// Axum handler to cancel a pending registration whose payment dialog was
/// dismissed.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/register/pending/{order_id}", // Path relative to /api
    params(
        ("order_id" = String, Path, description = "Order id of the pending registration")
    ),
    responses(
        (status = 200, description = "Pending registration removed", body = CancelResponse),
        (status = 404, description = "No pending registration for this order")
    ),
    tag = "Registration"
))]
pub async fn cancel_pending_handler(
    State(state): State<Arc<RegistrationState>>,
    Path(order_id): Path<String>,
) -> Result<Json<CancelResponse>, RegistrationError> {
    if state.coordinator.cancel_pending(&order_id)? {
        Ok(Json(CancelResponse {
            cancelled: true,
            order_id,
        }))
    } else {
        Err(RegistrationError::UnknownOrder(order_id))
    }
}
