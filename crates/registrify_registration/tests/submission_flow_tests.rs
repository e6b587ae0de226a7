//! End-to-end tests of the submission workflow against fake services.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use registrify_common::models::{PaymentOrder, PersistedRegistration, Registration};
use registrify_common::services::{BoxFuture, BoxedError, PaymentGateway, RegistrationStore};
use registrify_config::{AppConfig, RazorpayConfig, RegistrationConfig};
use registrify_registration::models::{PaymentCallbackRequest, RegistrationRequest, SubmitOutcome};
use registrify_registration::{routes, RegistrationError, SubmissionCoordinator};
use tower::ServiceExt;

const GOOD_SIGNATURE: &str = "good-signature";
const ORDER_ID: &str = "order_test_001";

// --- Fake services ---

#[derive(Default)]
struct FakeStore {
    saved: Mutex<Vec<Registration>>,
    fail: AtomicBool,
}

impl RegistrationStore for FakeStore {
    type Error = BoxedError;

    fn save_registration(
        &self,
        record: Registration,
    ) -> BoxFuture<'_, PersistedRegistration, Self::Error> {
        Box::pin(async move {
            if self.fail.load(Ordering::SeqCst) {
                let err: Box<dyn std::error::Error + Send + Sync> =
                    Box::new(std::io::Error::other("store unreachable"));
                return Err(BoxedError(err));
            }
            let mut saved = self.saved.lock().unwrap();
            saved.push(record);
            Ok(PersistedRegistration {
                document_id: format!("doc-{}", saved.len()),
                created_at: None,
            })
        })
    }
}

/// Store whose writes never resolve, for exercising in-flight behavior.
struct HangingStore;

impl RegistrationStore for HangingStore {
    type Error = BoxedError;

    fn save_registration(
        &self,
        _record: Registration,
    ) -> BoxFuture<'_, PersistedRegistration, Self::Error> {
        Box::pin(std::future::pending())
    }
}

struct FakeGateway;

impl PaymentGateway for FakeGateway {
    type Error = BoxedError;

    fn create_order(
        &self,
        amount: i64,
        currency: &str,
        _receipt: &str,
    ) -> BoxFuture<'_, PaymentOrder, Self::Error> {
        let currency = currency.to_string();
        Box::pin(async move {
            Ok(PaymentOrder {
                order_id: ORDER_ID.to_string(),
                amount,
                currency,
            })
        })
    }

    fn verify_callback(
        &self,
        _order_id: &str,
        _payment_id: &str,
        signature: &str,
    ) -> Result<(), Self::Error> {
        if signature == GOOD_SIGNATURE {
            Ok(())
        } else {
            let err: Box<dyn std::error::Error + Send + Sync> =
                Box::new(std::io::Error::other("signature mismatch"));
            Err(BoxedError(err))
        }
    }
}

// --- Helpers ---

fn test_config(payment_required: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        use_firestore: true,
        use_razorpay: payment_required,
        razorpay: Some(RazorpayConfig {
            key_id: "rzp_test_key".to_string(),
            currency: Some("INR".to_string()),
            unit_amount: Some(9900),
            product_name: None,
            description: None,
            theme_color: None,
            notes_address: None,
        }),
        registration: Some(RegistrationConfig {
            payment_required,
            food_type_required: false,
            pending_ttl_secs: Some(900),
        }),
        ..AppConfig::default()
    })
}

fn coordinator(
    payment_required: bool,
    store: Arc<FakeStore>,
) -> SubmissionCoordinator {
    SubmissionCoordinator::new(
        test_config(payment_required),
        Some(store),
        Some(Arc::new(FakeGateway)),
    )
}

fn valid_request() -> RegistrationRequest {
    RegistrationRequest {
        full_name: "Asha Nair".to_string(),
        age: "22".to_string(),
        qualification: "Graduate".to_string(),
        food_type: "Vegetarian".to_string(),
        email: "asha@example.com".to_string(),
        mobile_number: "9123456780".to_string(),
    }
}

fn good_callback() -> PaymentCallbackRequest {
    PaymentCallbackRequest {
        razorpay_order_id: ORDER_ID.to_string(),
        razorpay_payment_id: "pay_test_001".to_string(),
        razorpay_signature: GOOD_SIGNATURE.to_string(),
    }
}

// --- Direct persistence (no payment) ---

#[tokio::test]
async fn valid_submission_without_payment_is_persisted_directly() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(false, store.clone());

    let outcome = coord.submit(valid_request()).await.unwrap();
    match outcome {
        SubmitOutcome::Registered {
            document_id,
            message,
        } => {
            assert_eq!(document_id.as_deref(), Some("doc-1"));
            assert!(message.contains("Registration successful!"));
        }
        other => panic!("expected Registered, got {:?}", other),
    }

    let saved = store.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].mobile_number, "9123456780");
    assert_eq!(saved[0].payment_id, None);
}

#[tokio::test]
async fn invalid_email_yields_single_field_error_and_no_write() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(false, store.clone());

    let mut request = valid_request();
    request.email = "not-an-email".to_string();

    let err = coord.submit(request).await.unwrap_err();
    match err {
        RegistrationError::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get("email").unwrap(),
                "Please enter a valid email address"
            );
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert!(store.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn store_failure_is_swallowed_and_reported_without_receipt() {
    let store = Arc::new(FakeStore::default());
    store.fail.store(true, Ordering::SeqCst);
    let coord = coordinator(false, store.clone());

    let outcome = coord.submit(valid_request()).await.unwrap();
    match outcome {
        SubmitOutcome::Registered {
            document_id,
            message,
        } => {
            assert_eq!(document_id, None);
            assert_eq!(message, "Registration received.");
        }
        other => panic!("expected Registered, got {:?}", other),
    }
}

#[tokio::test]
async fn overlapping_submission_for_same_number_is_refused() {
    let coord = Arc::new(SubmissionCoordinator::new(
        test_config(false),
        Some(Arc::new(HangingStore)),
        None,
    ));

    let first = tokio::spawn({
        let coord = coord.clone();
        async move { coord.submit(valid_request()).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let err = coord.submit(valid_request()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::InFlight));

    first.abort();
}

#[tokio::test]
async fn cancelled_submission_releases_the_in_flight_entry() {
    let coord = Arc::new(SubmissionCoordinator::new(
        test_config(false),
        Some(Arc::new(HangingStore)),
        None,
    ));

    let first = tokio::spawn({
        let coord = coord.clone();
        async move { coord.submit(valid_request()).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    first.abort();
    let _ = first.await;

    // The number must be usable again: the retry gets past the in-flight
    // check and blocks on the store instead of failing fast with a 409.
    let retry = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        coord.submit(valid_request()),
    )
    .await;
    assert!(
        retry.is_err(),
        "retry after cancellation was rejected instead of reaching the store: {:?}",
        retry
    );
}

#[tokio::test]
async fn missing_store_yields_service_unavailable() {
    let coord = SubmissionCoordinator::new(test_config(false), None, None);
    let err = coord.submit(valid_request()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::StoreUnavailable));
}

// --- Payment flow ---

#[tokio::test]
async fn payment_flow_holds_record_until_verified_callback() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(true, store.clone());

    let outcome = coord.submit(valid_request()).await.unwrap();
    let checkout = match outcome {
        SubmitOutcome::PaymentRequired { checkout } => checkout,
        other => panic!("expected PaymentRequired, got {:?}", other),
    };
    assert_eq!(checkout.order_id, ORDER_ID);
    assert_eq!(checkout.amount, 9900);
    assert_eq!(checkout.prefill.contact, "9123456780");

    // Nothing persisted while the dialog is open.
    assert!(store.saved.lock().unwrap().is_empty());
    assert_eq!(coord.pending_count(), 1);

    let outcome = coord.complete_payment(good_callback()).await.unwrap();
    match outcome {
        SubmitOutcome::Registered { document_id, .. } => {
            assert_eq!(document_id.as_deref(), Some("doc-1"));
        }
        other => panic!("expected Registered, got {:?}", other),
    }

    let saved = store.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].payment_id.as_deref(), Some("pay_test_001"));
    assert_eq!(coord.pending_count(), 0);
}

#[tokio::test]
async fn bad_signature_keeps_registration_pending_for_retry() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(true, store.clone());
    coord.submit(valid_request()).await.unwrap();

    let mut callback = good_callback();
    callback.razorpay_signature = "forged".to_string();

    let err = coord.complete_payment(callback).await.unwrap_err();
    assert!(matches!(err, RegistrationError::SignatureRejected));
    assert!(store.saved.lock().unwrap().is_empty());

    // The pending entry survives, so a correct callback still succeeds.
    assert_eq!(coord.pending_count(), 1);
    coord.complete_payment(good_callback()).await.unwrap();
    assert_eq!(store.saved.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn callback_for_unknown_order_is_rejected() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(true, store);

    let mut callback = good_callback();
    callback.razorpay_order_id = "order_never_opened".to_string();

    let err = coord.complete_payment(callback).await.unwrap_err();
    assert!(matches!(err, RegistrationError::UnknownOrder(_)));
}

#[tokio::test]
async fn second_submission_while_payment_pending_is_refused() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(true, store);
    coord.submit(valid_request()).await.unwrap();

    let err = coord.submit(valid_request()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::DuplicatePending));
}

#[tokio::test]
async fn cancelled_pending_registration_is_gone() {
    let store = Arc::new(FakeStore::default());
    let coord = coordinator(true, store.clone());
    coord.submit(valid_request()).await.unwrap();

    assert!(coord.cancel_pending(ORDER_ID).unwrap());
    assert_eq!(coord.pending_count(), 0);
    assert!(!coord.cancel_pending(ORDER_ID).unwrap());

    // The callback now has nothing to complete.
    let err = coord.complete_payment(good_callback()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::UnknownOrder(_)));
    assert!(store.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn expired_pending_registration_is_purged() {
    let store = Arc::new(FakeStore::default());
    let config = Arc::new(AppConfig {
        registration: Some(RegistrationConfig {
            payment_required: true,
            food_type_required: false,
            pending_ttl_secs: Some(0),
        }),
        ..(*test_config(true)).clone()
    });
    let coord =
        SubmissionCoordinator::new(config, Some(store.clone()), Some(Arc::new(FakeGateway)));
    coord.submit(valid_request()).await.unwrap();

    // TTL of zero: the entry is already stale by the time the callback lands.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let err = coord.complete_payment(good_callback()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::UnknownOrder(_)));
    assert!(store.saved.lock().unwrap().is_empty());
}

// --- HTTP surface ---

#[tokio::test]
async fn register_route_returns_confirmation_json() {
    let store = Arc::new(FakeStore::default());
    let config = test_config(false);
    let coord = Arc::new(SubmissionCoordinator::new(
        config.clone(),
        Some(store),
        Some(Arc::new(FakeGateway)),
    ));
    let app = routes(config, coord);

    let body = serde_json::json!({
        "fullName": "Asha Nair",
        "age": "22",
        "qualification": "Graduate",
        "foodType": "Vegetarian",
        "email": "asha@example.com",
        "mobilenumber": "9123456780"
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "registered");
    assert_eq!(json["document_id"], "doc-1");
}

#[tokio::test]
async fn register_route_maps_validation_failure_to_422() {
    let store = Arc::new(FakeStore::default());
    let config = test_config(false);
    let coord = Arc::new(SubmissionCoordinator::new(
        config.clone(),
        Some(store),
        None,
    ));
    let app = routes(config, coord);

    let body = serde_json::json!({
        "fullName": "Asha Nair",
        "age": "22",
        "email": "asha@example.com",
        "mobilenumber": "12345"
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json["errors"]["mobilenumber"],
        "Please enter a 10-digit mobile number"
    );
}

#[tokio::test]
async fn cancel_route_returns_404_for_unknown_order() {
    let store = Arc::new(FakeStore::default());
    let config = test_config(true);
    let coord = Arc::new(SubmissionCoordinator::new(
        config.clone(),
        Some(store),
        Some(Arc::new(FakeGateway)),
    ));
    let app = routes(config, coord);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/register/pending/order_missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
