// --- File: crates/registrify_registration/src/models.rs ---
//! Request and response bodies for the registration endpoints.

use std::collections::BTreeMap;

use registrify_razorpay::CheckoutOptions;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Confirmation shown to the attendee after a successful registration.
pub const CONFIRMATION_MESSAGE: &str = "Registration successful! Thank you for securing your spot \
     at our commerce seminar. We look forward to seeing you there!";

/// Message returned when the record was accepted but the store write failed.
pub const RECEIVED_MESSAGE: &str = "Registration received.";

/// One registration submission, field names as the form posts them.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RegistrationRequest {
    #[serde(rename = "fullName")]
    #[cfg_attr(feature = "openapi", schema(example = "Asha Nair"))]
    pub full_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "22"))]
    pub age: String,
    /// Select value; unknown values fall back to "Other".
    #[serde(default = "default_qualification")]
    #[cfg_attr(feature = "openapi", schema(example = "Graduate"))]
    pub qualification: String,
    #[serde(rename = "foodType", default)]
    #[cfg_attr(feature = "openapi", schema(example = "Vegetarian"))]
    pub food_type: String,
    #[cfg_attr(feature = "openapi", schema(example = "asha@example.com"))]
    pub email: String,
    #[serde(rename = "mobilenumber")]
    #[cfg_attr(feature = "openapi", schema(example = "9123456780"))]
    pub mobile_number: String,
}

fn default_qualification() -> String {
    "Other".to_string()
}

/// The fields the hosted checkout widget posts back after payment.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaymentCallbackRequest {
    #[cfg_attr(feature = "openapi", schema(example = "order_IluGWxBm9U8zJ8"))]
    pub razorpay_order_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "pay_29QQoUBi66xm2f"))]
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Outcome of a submission.
///
/// `payment_required` means the caller must now open the checkout widget
/// with the embedded options and complete the payment callback before the
/// registration is persisted.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "status", rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum SubmitOutcome {
    Registered {
        /// Store-assigned document id; absent when the write failed and the
        /// record was accepted without a receipt.
        #[serde(skip_serializing_if = "Option::is_none")]
        document_id: Option<String>,
        message: String,
    },
    PaymentRequired {
        checkout: CheckoutOptions,
    },
}

/// Body of a 422 response: field name to error message.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ValidationErrorResponse {
    pub errors: BTreeMap<String, String>,
}

/// Result of cancelling a pending payment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CancelResponse {
    pub cancelled: bool,
    pub order_id: String,
}
