// --- File: crates/registrify_firestore/src/logic.rs ---
//! Document mapping for the Firestore REST API.
//!
//! Firestore's REST surface types every field explicitly
//! (`{"stringValue": ...}`), so the registration record is flattened into
//! that shape here. The document id and `createTime` come back from the
//! server; the client never writes a timestamp of its own.

use chrono::{DateTime, Utc};
use registrify_common::models::Registration;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::FirestoreError;

/// Firestore's response to a `createDocument` call, narrowed to what we use.
#[derive(Deserialize, Debug)]
pub struct FirestoreDocument {
    /// Full resource name:
    /// `projects/{p}/databases/{db}/documents/{collection}/{doc_id}`
    pub name: String,
    /// Server-assigned creation timestamp.
    #[serde(rename = "createTime", default)]
    pub create_time: Option<DateTime<Utc>>,
}

/// Error body Firestore returns on non-2xx responses.
#[derive(Deserialize, Debug)]
pub struct FirestoreErrorBody {
    #[serde(default)]
    pub error: Option<FirestoreErrorDetail>,
}

#[derive(Deserialize, Debug)]
pub struct FirestoreErrorDetail {
    #[serde(default)]
    pub message: String,
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

/// Flatten a registration record into Firestore's typed-field body.
///
/// Field names follow the existing document shape of the `userdata`
/// collection (`username`, `phonenumber`, ...). Optional fields are
/// omitted entirely rather than written as nulls.
pub fn registration_document_body(record: &Registration) -> Value {
    let mut fields = Map::new();
    fields.insert("username".to_string(), string_value(&record.full_name));
    fields.insert(
        "phonenumber".to_string(),
        string_value(&record.mobile_number),
    );
    fields.insert("email".to_string(), string_value(&record.email));
    fields.insert(
        "qualification".to_string(),
        string_value(record.qualification.as_str()),
    );
    fields.insert("age".to_string(), string_value(&record.age));
    if let Some(food_type) = record.food_type {
        fields.insert("foodType".to_string(), string_value(food_type.as_str()));
    }
    if let Some(payment_id) = record.payment_id.as_deref() {
        fields.insert("paymentId".to_string(), string_value(payment_id));
    }

    json!({ "fields": Value::Object(fields) })
}

/// Extract the generated document id from a full resource name.
pub fn document_id_from_name(name: &str) -> Result<String, FirestoreError> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .ok_or(FirestoreError::MissingDocumentId)
}
