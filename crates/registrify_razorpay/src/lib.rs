//! Razorpay payment gateway integration for Registrify
//!
//! This crate covers our side of the hosted-checkout protocol:
//!
//! - Opening an order for the fixed registration fee via the Orders API
//! - Building the configuration object the checkout widget expects
//!   (key, amount, currency, order id, prefill, notes, theme)
//! - Verifying the HMAC-SHA256 signature of the completion callback
//!
//! There is deliberately no capture, refund or settlement surface here;
//! everything past the completion callback is the gateway's business.

pub mod error;
pub mod logic;
pub mod service;

pub use error::RazorpayError;
pub use logic::{
    verify_payment_signature, CheckoutNotes, CheckoutOptions, CheckoutPrefill, CheckoutTheme,
    RazorpayClient, DEFAULT_CURRENCY, DEFAULT_UNIT_AMOUNT,
};
pub use service::RazorpayPaymentGateway;
