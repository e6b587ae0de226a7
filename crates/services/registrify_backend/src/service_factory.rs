// --- File: crates/services/registrify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Wires the concrete store and gateway clients behind the service traits,
//! honoring the runtime `use_firestore` and `use_razorpay` flags. A feature
//! whose flag is off or whose config section is missing yields `None`.

use std::sync::Arc;

use registrify_common::is_feature_enabled;
use registrify_common::services::{BoxedError, PaymentGateway, RegistrationStore, ServiceFactory};
use registrify_config::AppConfig;
use registrify_firestore::FirestoreRegistrationStore;
use registrify_razorpay::RazorpayPaymentGateway;
use tracing::info;

pub struct RegistrifyServiceFactory {
    registration_store: Option<Arc<dyn RegistrationStore<Error = BoxedError>>>,
    payment_gateway: Option<Arc<dyn PaymentGateway<Error = BoxedError>>>,
}

impl RegistrifyServiceFactory {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let mut factory = Self {
            registration_store: None,
            payment_gateway: None,
        };

        if is_feature_enabled(&config, config.use_firestore, config.firestore.as_ref()) {
            info!("Initializing Firestore registration store...");
            if let Some(firestore_config) = config.firestore.clone() {
                let store = FirestoreRegistrationStore::new(firestore_config);
                factory.registration_store = Some(Arc::new(store));
                info!("Firestore registration store initialized.");
            }
        } else {
            info!("Firestore disabled via runtime config or missing firestore config section.");
        }

        if is_feature_enabled(&config, config.use_razorpay, config.razorpay.as_ref()) {
            info!("Initializing Razorpay payment gateway...");
            if let Some(razorpay_config) = config.razorpay.clone() {
                let gateway = RazorpayPaymentGateway::new(razorpay_config);
                factory.payment_gateway = Some(Arc::new(gateway));
                info!("Razorpay payment gateway initialized.");
            }
        } else {
            info!("Razorpay disabled via runtime config or missing razorpay config section.");
        }

        factory
    }
}

impl ServiceFactory for RegistrifyServiceFactory {
    fn registration_store(&self) -> Option<Arc<dyn RegistrationStore<Error = BoxedError>>> {
        self.registration_store.clone()
    }

    fn payment_gateway(&self) -> Option<Arc<dyn PaymentGateway<Error = BoxedError>>> {
        self.payment_gateway.clone()
    }
}
