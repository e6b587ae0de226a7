// --- File: crates/registrify_razorpay/src/logic.rs ---
//! Razorpay Orders API client and payment callback verification.
//!
//! The hosted checkout widget collects payment details out-of-process and
//! reports completion via callback. Our side of the protocol is: open an
//! order for the fixed amount, hand the widget its configuration object,
//! and later verify that the callback's signature matches
//! HMAC-SHA256(`order_id|payment_id`) keyed with the API secret.

use hmac::{Hmac, Mac};
use registrify_common::models::{PaymentOrder, Registration};
use registrify_common::HTTP_CLIENT;
use registrify_config::RazorpayConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;
use tracing::{error, info};

use crate::error::RazorpayError;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

/// Fixed registration fee in minor units (INR paise).
pub const DEFAULT_UNIT_AMOUNT: i64 = 9900;
pub const DEFAULT_CURRENCY: &str = "INR";
const DEFAULT_PRODUCT_NAME: &str = "Adacode Solutions";
const DEFAULT_DESCRIPTION: &str = "Future in commerce program";
const DEFAULT_THEME_COLOR: &str = "#4A669C";
const DEFAULT_NOTES_ADDRESS: &str = "Razorpay Corporate office";

type HmacSha256 = Hmac<Sha256>;

// --- Structures for Razorpay API Response (Order Creation) ---
#[derive(Deserialize, Debug)]
struct RazorpayOrderResponse {
    id: String,
    amount: i64,
    currency: String,
    #[allow(dead_code)]
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RazorpayErrorBody {
    #[serde(default)]
    error: Option<RazorpayErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct RazorpayErrorDetail {
    #[serde(default)]
    description: String,
}

// --- Checkout widget configuration ---

/// Prefill block handed to the hosted checkout widget.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CheckoutNotes {
    pub address: String,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CheckoutTheme {
    pub color: String,
}

/// The configuration object for the hosted payment widget.
///
/// Mirrors the options Razorpay's checkout script recognizes; the widget
/// reports completion through its handler callback, which posts the
/// payment id and signature back to our callback endpoint.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CheckoutOptions {
    #[cfg_attr(feature = "openapi", schema(example = "rzp_test_1DP5mmOlF5G5ag"))]
    pub key: String,
    #[cfg_attr(feature = "openapi", schema(example = 9900))]
    pub amount: i64,
    #[cfg_attr(feature = "openapi", schema(example = "INR"))]
    pub currency: String,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(example = "order_IluGWxBm9U8zJ8"))]
    pub order_id: String,
    pub prefill: CheckoutPrefill,
    pub notes: CheckoutNotes,
    pub theme: CheckoutTheme,
}

/// Client for the Razorpay Orders API.
///
/// Authenticates with basic auth: the public key id from config, the key
/// secret from the RAZORPAY_KEY_SECRET env var.
#[derive(Debug, Clone)]
pub struct RazorpayClient {
    config: RazorpayConfig,
    base_url: String,
}

impl RazorpayClient {
    pub fn new(config: RazorpayConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Point the client at a custom endpoint. Used by tests.
    pub fn with_base_url(config: RazorpayConfig, base_url: impl Into<String>) -> Self {
        Self {
            config,
            base_url: base_url.into(),
        }
    }

    pub fn config(&self) -> &RazorpayConfig {
        &self.config
    }

    /// Open a payment order for the given amount in minor units.
    pub async fn create_order(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, RazorpayError> {
        registrify_config::ensure_dotenv_loaded();
        let key_secret =
            std::env::var("RAZORPAY_KEY_SECRET").map_err(|_| RazorpayError::ConfigError)?;

        let body = json!({
            "amount": amount,
            "currency": currency,
            "receipt": receipt,
            "notes": {
                "address": self.notes_address(),
            },
        });

        info!("Creating Razorpay order for {} {}", amount, currency);
        let response = HTTP_CLIENT
            .post(format!("{}/v1/orders", self.base_url))
            .basic_auth(&self.config.key_id, Some(&key_secret))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<RazorpayErrorBody>(&body_text) {
                Ok(err_body) => err_body
                    .error
                    .map(|detail| detail.description)
                    .unwrap_or(body_text),
                Err(_) => body_text,
            };
            error!(
                "Razorpay order creation failed with status {}: {}",
                status, message
            );
            return Err(RazorpayError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let order: RazorpayOrderResponse = serde_json::from_str(&body_text)?;
        info!("Razorpay order created: {}", order.id);

        Ok(PaymentOrder {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }

    /// Build the widget configuration for an open order, prefilled from the
    /// attendee's record.
    pub fn checkout_options(&self, order: &PaymentOrder, record: &Registration) -> CheckoutOptions {
        CheckoutOptions {
            key: self.config.key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            name: self
                .config
                .product_name
                .clone()
                .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            description: self
                .config
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            order_id: order.order_id.clone(),
            prefill: CheckoutPrefill {
                name: record.full_name.clone(),
                email: record.email.clone(),
                contact: record.mobile_number.clone(),
            },
            notes: CheckoutNotes {
                address: self.notes_address(),
            },
            theme: CheckoutTheme {
                color: self
                    .config
                    .theme_color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
            },
        }
    }

    fn notes_address(&self) -> String {
        self.config
            .notes_address
            .clone()
            .unwrap_or_else(|| DEFAULT_NOTES_ADDRESS.to_string())
    }
}

/// Verify a payment-completion callback signature.
///
/// Razorpay signs `order_id|payment_id` with HMAC-SHA256 keyed by the API
/// secret and hex-encodes the result. Verification is constant-time via the
/// Mac's own verify.
pub fn verify_payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
    signature_hex: &str,
) -> Result<(), RazorpayError> {
    let signature = hex::decode(signature_hex)
        .map_err(|_| RazorpayError::SignatureError("signature is not valid hex".to_string()))?;

    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())
        .map_err(|e| RazorpayError::InternalError(format!("HMAC init failed: {}", e)))?;
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());

    mac.verify_slice(&signature)
        .map_err(|_| RazorpayError::SignatureError("signature mismatch".to_string()))
}
