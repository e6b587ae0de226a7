// --- File: crates/registrify_common/src/models.rs ---

// This file contains data structures and models that are shared across the
// application: the registration record itself and the value types it carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendee qualification, as offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Qualification {
    #[serde(rename = "Plus Two")]
    PlusTwo,
    #[serde(rename = "ITI or Diploma")]
    ItiOrDiploma,
    Graduate,
    Masters,
    #[default]
    Other,
}

impl Qualification {
    /// Parse a form value, falling back to `Other` for anything unrecognized.
    /// The form's select control defaults to "Other" as well.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "Plus Two" => Qualification::PlusTwo,
            "ITI or Diploma" => Qualification::ItiOrDiploma,
            "Graduate" => Qualification::Graduate,
            "Masters" => Qualification::Masters,
            _ => Qualification::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::PlusTwo => "Plus Two",
            Qualification::ItiOrDiploma => "ITI or Diploma",
            Qualification::Graduate => "Graduate",
            Qualification::Masters => "Masters",
            Qualification::Other => "Other",
        }
    }
}

/// Food preference of the attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum FoodType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl FoodType {
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "Vegetarian" => Some(FoodType::Vegetarian),
            "Non-Vegetarian" => Some(FoodType::NonVegetarian),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Vegetarian => "Vegetarian",
            FoodType::NonVegetarian => "Non-Vegetarian",
        }
    }
}

/// A validated registration record, the unit of persistence.
///
/// `payment_id` is only ever set from a verified payment callback; the
/// client side never fabricates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Registration {
    pub full_name: String,
    pub age: String,
    pub qualification: Qualification,
    pub food_type: Option<FoodType>,
    pub email: String,
    pub mobile_number: String,
    pub payment_id: Option<String>,
}

/// The store's receipt for a persisted registration.
///
/// The document id and creation timestamp are assigned by the document
/// store, never by this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersistedRegistration {
    pub document_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A payment order opened with the gateway for a fixed amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
}
