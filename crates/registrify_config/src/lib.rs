// --- File: crates/registrify_config/src/lib.rs ---
//! Configuration loading for Registrify.
//!
//! Non-secret settings come from a layered `config` build: an optional file
//! (`config/default` by default, override with `CONFIG_PATH`) with `APP_*`
//! environment variables on top (`APP_SERVER__PORT=8080` style). Secrets
//! (FIRESTORE_API_KEY, RAZORPAY_KEY_SECRET) are read straight from the
//! environment by the crates that need them and never live in config files.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

pub mod models;
pub use models::{AppConfig, FirestoreConfig, RazorpayConfig, RegistrationConfig, ServerConfig};

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Load `.env` into the process environment exactly once.
///
/// Safe to call from every crate that touches env vars; later calls are no-ops.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        // A missing .env file is fine; deployed environments set real env vars.
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
    });
}

/// Load the application configuration.
///
/// Layering order (later wins): config file, then `APP_*` env overrides.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default".to_string());

    let config = Config::builder()
        .add_source(File::with_name(&config_path).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    config.try_deserialize::<AppConfig>()
}
