// --- File: crates/registrify_registration/src/submission.rs ---
//! Submission workflow: validate, optionally open a payment order, persist.
//!
//! The coordinator owns two pieces of in-memory state. The in-flight set
//! holds the mobile numbers of submissions currently being processed, so a
//! double-click cannot produce two store writes. The pending map holds
//! validated records waiting for their payment callback, keyed by order id;
//! entries expire after a TTL and can be cancelled explicitly.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use registrify_common::models::Registration;
use registrify_common::services::{BoxedError, PaymentGateway, RegistrationStore};
use registrify_config::AppConfig;
use registrify_razorpay::{RazorpayClient, DEFAULT_CURRENCY, DEFAULT_UNIT_AMOUNT};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::RegistrationError;
use crate::form::{RegistrationForm, ValidationPolicy};
use crate::models::{
    PaymentCallbackRequest, RegistrationRequest, SubmitOutcome, CONFIRMATION_MESSAGE,
    RECEIVED_MESSAGE,
};
use crate::validation::Field;

/// How long a pending payment may stay open before it expires.
pub const DEFAULT_PENDING_TTL_SECS: u64 = 900;

#[derive(Debug, Clone)]
struct PendingRegistration {
    record: Registration,
    opened_at: DateTime<Utc>,
}

/// Holds a mobile number in the in-flight set until dropped.
///
/// Removal lives in `Drop` so the entry is released however the owning
/// future ends, including cancellation at an await point.
struct InFlightGuard<'a> {
    registry: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(
        registry: &'a Mutex<HashSet<String>>,
        key: String,
    ) -> Result<Self, RegistrationError> {
        let mut in_flight = registry
            .lock()
            .map_err(|_| RegistrationError::Internal("in-flight lock poisoned".to_string()))?;
        if !in_flight.insert(key.clone()) {
            warn!("Duplicate submission in flight for {}", key);
            return Err(RegistrationError::InFlight);
        }
        drop(in_flight);
        Ok(Self { registry, key })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.registry.lock() {
            in_flight.remove(&self.key);
        }
    }
}

/// Drives a registration from raw form input to a persisted document.
pub struct SubmissionCoordinator {
    config: Arc<AppConfig>,
    store: Option<Arc<dyn RegistrationStore<Error = BoxedError>>>,
    gateway: Option<Arc<dyn PaymentGateway<Error = BoxedError>>>,
    checkout: Option<RazorpayClient>,
    pending: Mutex<HashMap<String, PendingRegistration>>,
    in_flight: Mutex<HashSet<String>>,
}

impl SubmissionCoordinator {
    pub fn new(
        config: Arc<AppConfig>,
        store: Option<Arc<dyn RegistrationStore<Error = BoxedError>>>,
        gateway: Option<Arc<dyn PaymentGateway<Error = BoxedError>>>,
    ) -> Self {
        let checkout = config
            .razorpay
            .as_ref()
            .map(|razorpay_config| RazorpayClient::new(razorpay_config.clone()));
        Self {
            config,
            store,
            gateway,
            checkout,
            pending: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            food_type_required: self
                .config
                .registration
                .as_ref()
                .map(|r| r.food_type_required)
                .unwrap_or(false),
        }
    }

    fn payment_required(&self) -> bool {
        self.config
            .registration
            .as_ref()
            .map(|r| r.payment_required)
            .unwrap_or(false)
    }

    fn pending_ttl(&self) -> Duration {
        let secs = self
            .config
            .registration
            .as_ref()
            .and_then(|r| r.pending_ttl_secs)
            .unwrap_or(DEFAULT_PENDING_TTL_SECS);
        Duration::seconds(secs as i64)
    }

    /// Handle one submission.
    ///
    /// Holds the attendee's mobile number in the in-flight set for the
    /// duration of the call; a concurrent submission for the same number is
    /// rejected rather than queued. The guard releases on drop, so a
    /// request cancelled mid-await cannot wedge its number.
    pub async fn submit(
        &self,
        request: RegistrationRequest,
    ) -> Result<SubmitOutcome, RegistrationError> {
        let record = self.validate(&request)?;

        let _guard = InFlightGuard::acquire(&self.in_flight, record.mobile_number.clone())?;

        self.submit_validated(record).await
    }

    fn validate(&self, request: &RegistrationRequest) -> Result<Registration, RegistrationError> {
        let mut form = RegistrationForm::new();
        form.set_field(Field::FullName, &request.full_name);
        form.set_field(Field::Age, &request.age);
        form.set_field(Field::Email, &request.email);
        form.set_field(Field::MobileNumber, &request.mobile_number);
        form.set_field(Field::FoodType, &request.food_type);
        form.set_qualification(&request.qualification);

        form.validate(&self.validation_policy())
            .ok_or_else(|| RegistrationError::Invalid(form.errors_map()))
    }

    async fn submit_validated(
        &self,
        record: Registration,
    ) -> Result<SubmitOutcome, RegistrationError> {
        let store = self
            .store
            .as_ref()
            .ok_or(RegistrationError::StoreUnavailable)?;

        if !self.payment_required() {
            return Ok(Self::persist(store, record).await);
        }

        let gateway = self
            .gateway
            .as_ref()
            .ok_or(RegistrationError::GatewayUnavailable)?;
        let checkout = self
            .checkout
            .as_ref()
            .ok_or(RegistrationError::GatewayUnavailable)?;

        // Refuse a second dialog for an attendee who already has one open.
        {
            let mut pending = self.lock_pending()?;
            Self::purge_expired(&mut pending, self.pending_ttl());
            if pending
                .values()
                .any(|entry| entry.record.mobile_number == record.mobile_number)
            {
                return Err(RegistrationError::DuplicatePending);
            }
        }

        let razorpay_config = self.config.razorpay.as_ref();
        let amount = razorpay_config
            .and_then(|c| c.unit_amount)
            .unwrap_or(DEFAULT_UNIT_AMOUNT);
        let currency = razorpay_config
            .and_then(|c| c.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let receipt = format!("reg-{}", Uuid::new_v4());

        let order = gateway
            .create_order(amount, &currency, &receipt)
            .await
            .map_err(|e| {
                error!("Order creation failed: {}", e);
                RegistrationError::Gateway(e.to_string())
            })?;

        let options = checkout.checkout_options(&order, &record);

        {
            let mut pending = self.lock_pending()?;
            pending.insert(
                order.order_id.clone(),
                PendingRegistration {
                    record,
                    opened_at: Utc::now(),
                },
            );
        }
        info!("Payment dialog opened for order {}", order.order_id);

        Ok(SubmitOutcome::PaymentRequired { checkout: options })
    }

    /// Handle the payment-completion callback from the checkout widget.
    ///
    /// A failed signature check puts the pending entry back, so the attendee
    /// can retry the payment without resubmitting the form.
    pub async fn complete_payment(
        &self,
        callback: PaymentCallbackRequest,
    ) -> Result<SubmitOutcome, RegistrationError> {
        let gateway = self
            .gateway
            .as_ref()
            .ok_or(RegistrationError::GatewayUnavailable)?;

        let entry = {
            let mut pending = self.lock_pending()?;
            Self::purge_expired(&mut pending, self.pending_ttl());
            pending
                .remove(&callback.razorpay_order_id)
                .ok_or_else(|| RegistrationError::UnknownOrder(callback.razorpay_order_id.clone()))?
        };

        if let Err(e) = gateway.verify_callback(
            &callback.razorpay_order_id,
            &callback.razorpay_payment_id,
            &callback.razorpay_signature,
        ) {
            warn!(
                "Signature verification failed for order {}: {}",
                callback.razorpay_order_id, e
            );
            let mut pending = self.lock_pending()?;
            pending.insert(callback.razorpay_order_id.clone(), entry);
            return Err(RegistrationError::SignatureRejected);
        }

        let store = self
            .store
            .as_ref()
            .ok_or(RegistrationError::StoreUnavailable)?;
        let mut record = entry.record;
        record.payment_id = Some(callback.razorpay_payment_id);
        info!("Payment verified for order {}", callback.razorpay_order_id);

        Ok(Self::persist(store, record).await)
    }

    /// Drop a pending registration whose payment dialog was abandoned.
    /// Returns false when no such order is pending.
    pub fn cancel_pending(&self, order_id: &str) -> Result<bool, RegistrationError> {
        let mut pending = self.lock_pending()?;
        Self::purge_expired(&mut pending, self.pending_ttl());
        let removed = pending.remove(order_id).is_some();
        if removed {
            info!("Pending registration cancelled for order {}", order_id);
        }
        Ok(removed)
    }

    /// Number of registrations currently awaiting a payment callback.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Write the record to the store. A store failure is logged and reported
    /// as an acceptance without a receipt; it never fails the submission.
    async fn persist(
        store: &Arc<dyn RegistrationStore<Error = BoxedError>>,
        record: Registration,
    ) -> SubmitOutcome {
        match store.save_registration(record).await {
            Ok(persisted) => {
                info!("Registration persisted as {}", persisted.document_id);
                SubmitOutcome::Registered {
                    document_id: Some(persisted.document_id),
                    message: CONFIRMATION_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                error!("Failed to persist registration: {}", e);
                SubmitOutcome::Registered {
                    document_id: None,
                    message: RECEIVED_MESSAGE.to_string(),
                }
            }
        }
    }

    fn lock_pending(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, PendingRegistration>>, RegistrationError>
    {
        self.pending
            .lock()
            .map_err(|_| RegistrationError::Internal("pending lock poisoned".to_string()))
    }

    fn purge_expired(pending: &mut HashMap<String, PendingRegistration>, ttl: Duration) {
        let now = Utc::now();
        pending.retain(|order_id, entry| {
            let keep = now - entry.opened_at <= ttl;
            if !keep {
                warn!("Pending registration expired for order {}", order_id);
            }
            keep
        });
    }
}
