// --- File: crates/services/registrify_backend/src/app_state.rs ---
use std::sync::Arc;

use registrify_common::services::ServiceFactory;
use registrify_config::AppConfig;
use registrify_registration::SubmissionCoordinator;

use crate::service_factory::RegistrifyServiceFactory;

/// Application state shared across all routes.
///
/// The service factory owns the concrete store and gateway clients; the
/// submission coordinator is handed whichever of them the runtime flags
/// enabled. Keeping both here makes the wiring explicit and lets tests
/// swap the factory for mocks.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,
    #[allow(dead_code)]
    pub service_factory: Arc<dyn ServiceFactory>,
    pub coordinator: Arc<SubmissionCoordinator>,
}

impl AppState {
    /// Create the application state from loaded configuration.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(RegistrifyServiceFactory::new(config.clone()));
        let coordinator = Arc::new(SubmissionCoordinator::new(
            config.clone(),
            service_factory.registration_store(),
            service_factory.payment_gateway(),
        ));

        Self {
            config,
            service_factory,
            coordinator,
        }
    }

    /// Build the state over an explicit factory. Used by tests.
    #[allow(dead_code)]
    pub fn with_factory(config: Arc<AppConfig>, factory: Arc<dyn ServiceFactory>) -> Self {
        let coordinator = Arc::new(SubmissionCoordinator::new(
            config.clone(),
            factory.registration_store(),
            factory.payment_gateway(),
        ));
        Self {
            config,
            service_factory: factory,
            coordinator,
        }
    }
}
