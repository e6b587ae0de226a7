// --- File: crates/registrify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for the two external services the
//! application talks to: the document store that persists registrations and
//! the payment gateway. The traits allow for dependency injection and easier
//! testing by decoupling the submission workflow from specific SDK clients.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::models::{PaymentOrder, PersistedRegistration, Registration};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the document store holding registration records.
///
/// One call per submission: write a single document to a fixed collection.
/// The store assigns the document identifier and the creation timestamp.
/// Records are immutable once persisted, so there is no update or delete.
pub trait RegistrationStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist one registration record and return the store's receipt.
    fn save_registration(
        &self,
        record: Registration,
    ) -> BoxFuture<'_, PersistedRegistration, Self::Error>;
}

/// A trait for payment gateway operations.
///
/// The gateway's completion signal arrives out-of-band (the hosted widget
/// posts a callback), so the trait covers opening an order and verifying
/// the callback's signature, not awaiting the payment itself.
pub trait PaymentGateway: Send + Sync {
    /// Error type returned by gateway operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a payment order for the given amount in minor units.
    fn create_order(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> BoxFuture<'_, PaymentOrder, Self::Error>;

    /// Verify the signature of a payment-completion callback.
    ///
    /// Pure check over the callback fields; returns Ok(()) only when the
    /// signature proves the gateway produced the payment id for this order.
    fn verify_callback(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), Self::Error>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for accessing the services the application
/// needs. Features disabled by configuration yield `None`.
pub trait ServiceFactory: Send + Sync {
    /// Get the registration store instance.
    fn registration_store(&self) -> Option<Arc<dyn RegistrationStore<Error = BoxedError>>>;

    /// Get the payment gateway instance.
    fn payment_gateway(&self) -> Option<Arc<dyn PaymentGateway<Error = BoxedError>>>;
}
