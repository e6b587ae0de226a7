// --- File: crates/registrify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Firestore Config ---
// Holds non-secret Firestore config. The web API key is loaded directly
// from the FIRESTORE_API_KEY env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FirestoreConfig {
    pub project_id: String, // Mandatory
    /// Database id within the project. Firestore's default database is "(default)".
    #[serde(default = "default_database_id")]
    pub database_id: String,
    /// Collection the registration documents are written to.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "userdata".to_string()
}

// --- Razorpay Config ---
// Holds non-secret Razorpay config. The key secret is loaded directly
// from the RAZORPAY_KEY_SECRET env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RazorpayConfig {
    pub key_id: String, // Mandatory, also handed to the hosted checkout widget
    pub currency: Option<String>,
    pub unit_amount: Option<i64>,
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub theme_color: Option<String>,
    pub notes_address: Option<String>,
}

// --- Registration Config ---
// Workflow settings for the registration form itself.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RegistrationConfig {
    /// When true, a registration is persisted only after a completed payment
    /// callback. When false, submissions are written to the store directly.
    #[serde(default)]
    pub payment_required: bool,
    /// Whether the food preference field must be filled in.
    #[serde(default)]
    pub food_type_required: bool,
    /// Seconds a pending payment may stay open before it expires.
    pub pending_ttl_secs: Option<u64>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_firestore: bool,
    #[serde(default)]
    pub use_razorpay: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub firestore: Option<FirestoreConfig>,
    #[serde(default)]
    pub razorpay: Option<RazorpayConfig>,
    #[serde(default)]
    pub registration: Option<RegistrationConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            use_firestore: false,
            use_razorpay: false,
            firestore: None,
            razorpay: None,
            registration: None,
        }
    }
}
