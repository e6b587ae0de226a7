use registrify_common::models::{FoodType, Qualification, Registration};
use registrify_config::FirestoreConfig;
use registrify_firestore::{FirestoreClient, FirestoreError};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> FirestoreConfig {
    FirestoreConfig {
        project_id: "registrify-demo".to_string(),
        database_id: "(default)".to_string(),
        collection: "userdata".to_string(),
    }
}

fn sample_record() -> Registration {
    Registration {
        full_name: "Asha Nair".to_string(),
        age: "22".to_string(),
        qualification: Qualification::Graduate,
        food_type: Some(FoodType::Vegetarian),
        email: "asha@example.com".to_string(),
        mobile_number: "9123456780".to_string(),
        payment_id: None,
    }
}

#[tokio::test]
async fn successful_write_returns_generated_document_id() {
    std::env::set_var("FIRESTORE_API_KEY", "test-api-key");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1/projects/registrify-demo/databases/(default)/documents/userdata",
        ))
        .and(query_param("key", "test-api-key"))
        .and(body_partial_json(serde_json::json!({
            "fields": {
                "username": { "stringValue": "Asha Nair" },
                "phonenumber": { "stringValue": "9123456780" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "projects/registrify-demo/databases/(default)/documents/userdata/AbC123xyz",
            "createTime": "2026-02-01T10:15:30.123456Z",
            "updateTime": "2026-02-01T10:15:30.123456Z",
            "fields": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FirestoreClient::with_base_url(test_config(), server.uri());
    let receipt = client.create_registration(&sample_record()).await.unwrap();

    assert_eq!(receipt.document_id, "AbC123xyz");
    assert!(!receipt.document_id.is_empty());
    assert!(receipt.created_at.is_some());
}

#[tokio::test]
async fn api_error_is_reported_with_status_and_message() {
    std::env::set_var("FIRESTORE_API_KEY", "test-api-key");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "Missing or insufficient permissions." }
        })))
        .mount(&server)
        .await;

    let client = FirestoreClient::with_base_url(test_config(), server.uri());
    let err = client
        .create_registration(&sample_record())
        .await
        .unwrap_err();

    match err {
        FirestoreError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 403);
            assert!(message.contains("insufficient permissions"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
