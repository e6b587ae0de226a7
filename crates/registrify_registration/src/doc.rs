// --- File: crates/registrify_registration/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{
    CancelResponse, PaymentCallbackRequest, RegistrationRequest, SubmitOutcome,
    ValidationErrorResponse,
};
use registrify_common::models::{FoodType, PaymentOrder, Qualification, Registration};
use registrify_razorpay::{CheckoutNotes, CheckoutOptions, CheckoutPrefill, CheckoutTheme};

#[utoipa::path(
    post,
    path = "/register", // Path relative to /api
    request_body(content = RegistrationRequest, example = json!({
        "fullName": "Asha Nair",
        "age": "22",
        "qualification": "Graduate",
        "foodType": "Vegetarian",
        "email": "asha@example.com",
        "mobilenumber": "9123456780"
    })),
    responses(
        (status = 200, description = "Registered, or payment required with checkout options", body = SubmitOutcome),
        (status = 422, description = "Validation failed", body = ValidationErrorResponse),
        (status = 409, description = "A submission or payment for this attendee is already open"),
        (status = 503, description = "Registration store or payment gateway not available")
    ),
    tag = "Registration"
)]
fn doc_register_handler() {}

#[utoipa::path(
    post,
    path = "/register/payment-callback", // Path relative to /api
    request_body = PaymentCallbackRequest,
    responses(
        (status = 200, description = "Payment verified and registration persisted", body = SubmitOutcome),
        (status = 401, description = "Signature verification failed"),
        (status = 404, description = "No pending registration for this order")
    ),
    tag = "Registration"
)]
fn doc_payment_callback_handler() {}

#[utoipa::path(
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
)]
fn doc_cancel_pending_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_register_handler,
        doc_payment_callback_handler,
        doc_cancel_pending_handler
    ),
    components(
        schemas(
            RegistrationRequest,
            PaymentCallbackRequest,
            SubmitOutcome,
            ValidationErrorResponse,
            CancelResponse,
            Registration,
            Qualification,
            FoodType,
            PaymentOrder,
            CheckoutOptions,
            CheckoutPrefill,
            CheckoutNotes,
            CheckoutTheme
        )
    ),
    tags(
        (name = "Registration", description = "Seminar registration form API")
    )
)]
pub struct RegistrationApiDoc;
