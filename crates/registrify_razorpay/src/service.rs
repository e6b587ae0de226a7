// --- File: crates/registrify_razorpay/src/service.rs ---
use registrify_common::models::PaymentOrder;
use registrify_common::services::{BoxedError, BoxFuture, PaymentGateway};
use registrify_config::RazorpayConfig;

use crate::error::RazorpayError;
use crate::logic::{verify_payment_signature, RazorpayClient};

/// Razorpay payment gateway implementation.
pub struct RazorpayPaymentGateway {
    client: RazorpayClient,
}

impl RazorpayPaymentGateway {
    /// Create a new Razorpay payment gateway.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            client: RazorpayClient::new(config),
        }
    }

    /// Create a gateway over an existing client. Lets tests point the
    /// gateway at a mock endpoint.
    pub fn from_client(client: RazorpayClient) -> Self {
        Self { client }
    }

    /// Access the underlying client, e.g. to build checkout options.
    pub fn client(&self) -> &RazorpayClient {
        &self.client
    }
}

impl PaymentGateway for RazorpayPaymentGateway {
    type Error = BoxedError;

    fn create_order(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> BoxFuture<'_, PaymentOrder, Self::Error> {
        let currency = currency.to_string();
        let receipt = receipt.to_string();

        Box::pin(async move {
            self.client
                .create_order(amount, &currency, &receipt)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn verify_callback(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), Self::Error> {
        registrify_config::ensure_dotenv_loaded();
        let key_secret = std::env::var("RAZORPAY_KEY_SECRET")
            .map_err(|_| BoxedError(Box::new(RazorpayError::ConfigError)))?;

        verify_payment_signature(&key_secret, order_id, payment_id, signature)
            .map_err(|e| BoxedError(Box::new(e)))
    }
}
