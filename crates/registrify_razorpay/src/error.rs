// --- File: crates/registrify_razorpay/src/error.rs ---
use registrify_common::HttpStatusCode;
use thiserror::Error;

/// Razorpay-specific error types.
#[derive(Error, Debug)]
pub enum RazorpayError {
    /// Error occurred during a Razorpay API request
    #[error("Razorpay API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Razorpay API
    #[error("Razorpay API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Razorpay API response
    #[error("Failed to parse Razorpay API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Razorpay configuration
    #[error("Razorpay configuration missing or incomplete")]
    ConfigError,

    /// Payment callback signature verification failed
    #[error("Razorpay payment signature verification failed: {0}")]
    SignatureError(String),

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

impl HttpStatusCode for RazorpayError {
    fn status_code(&self) -> u16 {
        match self {
            RazorpayError::RequestError(_) => 500,
            RazorpayError::ApiError { status_code, .. } => *status_code,
            RazorpayError::ParseError(_) => 400,
            RazorpayError::ConfigError => 500,
            RazorpayError::SignatureError(_) => 401,
            RazorpayError::InternalError(_) => 500,
        }
    }
}
