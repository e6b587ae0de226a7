//! Feature flag handling for the Registrify application.
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]` (currently
//!    only `openapi`)
//! 2. Runtime feature flags using configuration values (`use_firestore`,
//!    `use_razorpay`)
//!
//! This module provides helper functions for checking if features are enabled
//! at runtime based on configuration values.

use registrify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// A feature counts as enabled when its `use_*` flag is set and its
/// configuration section is present.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the Firestore document store is enabled at runtime.
pub fn is_firestore_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_firestore, config.firestore.as_ref())
}

/// Check if the Razorpay payment gateway is enabled at runtime.
pub fn is_razorpay_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_razorpay, config.razorpay.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrify_config::FirestoreConfig;

    #[test]
    fn feature_requires_flag_and_config_section() {
        let mut config = AppConfig::default();
        config.use_firestore = true;
        let config = Arc::new(config);
        // Flag set but no config section
        assert!(!is_firestore_enabled(&config));

        let mut config = AppConfig::default();
        config.use_firestore = true;
        config.firestore = Some(FirestoreConfig {
            project_id: "demo".to_string(),
            database_id: "(default)".to_string(),
            collection: "userdata".to_string(),
        });
        assert!(is_firestore_enabled(&Arc::new(config)));
    }
}
