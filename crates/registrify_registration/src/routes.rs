// --- File: crates/registrify_registration/src/routes.rs ---

use crate::handlers::{
    cancel_pending_handler, payment_callback_handler, register_handler, RegistrationState,
};
use crate::submission::SubmissionCoordinator;
use axum::{
    routing::{delete, post},
    Router,
};
use registrify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the registration feature.
pub fn routes(config: Arc<AppConfig>, coordinator: Arc<SubmissionCoordinator>) -> Router {
    let state = Arc::new(RegistrationState {
        config,
        coordinator,
    });

    Router::new()
        .route("/register", post(register_handler))
        .route("/register/payment-callback", post(payment_callback_handler))
        .route("/register/pending/{order_id}", delete(cancel_pending_handler))
        .with_state(state)
}
