// --- File: crates/registrify_registration/src/form.rs ---
//! Form state for one registration attempt.
//!
//! Field values are held as raw strings, exactly as entered. The error map
//! is derived on every submit: it is cleared and recomputed from scratch,
//! so correcting a field and resubmitting never leaves a stale entry
//! behind.

use std::collections::BTreeMap;

use registrify_common::models::{FoodType, Qualification, Registration};

use crate::validation::{
    validate_email, validate_phone, Field, AGE_ERROR, EMAIL_ERROR, FOOD_TYPE_ERROR, NAME_ERROR,
    PHONE_ERROR,
};

/// What the form requires beyond the fixed email/phone checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationPolicy {
    pub food_type_required: bool,
}

/// Lifecycle of one registration attempt.
///
/// Rejection is not terminal; it returns the form to `Editing`. A pending
/// payment dialog that is never completed stays `DialogOpen` until the
/// pending entry expires or is cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    DialogOpen { order_id: String },
    Persisted,
}

#[derive(Debug, Clone, Default)]
struct FieldValues {
    full_name: String,
    age: String,
    qualification: String,
    food_type: String,
    email: String,
    mobile_number: String,
}

/// In-memory state of the registration form: current field values plus the
/// error map derived from the last submit.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: FieldValues,
    errors: BTreeMap<Field, String>,
    phase: FormPhase,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// An empty form. The qualification select starts on "Other".
    pub fn new() -> Self {
        Self {
            values: FieldValues {
                qualification: Qualification::Other.as_str().to_string(),
                ..FieldValues::default()
            },
            errors: BTreeMap::new(),
            phase: FormPhase::Editing,
        }
    }

    /// Overwrite exactly one field, leaving all others unchanged.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::FullName => self.values.full_name = value.to_string(),
            Field::Age => self.values.age = value.to_string(),
            Field::Email => self.values.email = value.to_string(),
            Field::MobileNumber => self.values.mobile_number = value.to_string(),
            Field::FoodType => self.values.food_type = value.to_string(),
        }
    }

    /// Overwrite the qualification select value.
    pub fn set_qualification(&mut self, value: &str) {
        self.values.qualification = value.to_string();
    }

    /// Current raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.values.full_name,
            Field::Age => &self.values.age,
            Field::Email => &self.values.email,
            Field::MobileNumber => &self.values.mobile_number,
            Field::FoodType => &self.values.food_type,
        }
    }

    /// The error map derived from the last submit.
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// The error map with string keys, for the HTTP response body.
    pub fn errors_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str().to_string(), message.clone()))
            .collect()
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Run the submit-time validation sequence.
    ///
    /// The order is fixed: email, then phone, then the required fields.
    /// The first failure records its error and stops the sequence, so the
    /// derived map holds at most one entry. On success the raw values are
    /// converted into a validated record with no payment id.
    pub fn validate(&mut self, policy: &ValidationPolicy) -> Option<Registration> {
        self.errors.clear();

        if !validate_email(&self.values.email) {
            self.errors.insert(Field::Email, EMAIL_ERROR.to_string());
            return None;
        }
        if !validate_phone(&self.values.mobile_number) {
            self.errors
                .insert(Field::MobileNumber, PHONE_ERROR.to_string());
            return None;
        }
        if self.values.full_name.is_empty() {
            self.errors.insert(Field::FullName, NAME_ERROR.to_string());
            return None;
        }
        if self.values.age.is_empty() {
            self.errors.insert(Field::Age, AGE_ERROR.to_string());
            return None;
        }

        let food_type = FoodType::from_form_value(&self.values.food_type);
        if policy.food_type_required && food_type.is_none() {
            self.errors
                .insert(Field::FoodType, FOOD_TYPE_ERROR.to_string());
            return None;
        }

        Some(Registration {
            full_name: self.values.full_name.clone(),
            age: self.values.age.clone(),
            qualification: Qualification::from_form_value(&self.values.qualification),
            food_type,
            email: self.values.email.clone(),
            mobile_number: self.values.mobile_number.clone(),
            payment_id: None,
        })
    }

    /// Record that the payment dialog was opened for this attempt.
    pub fn mark_dialog_open(&mut self, order_id: &str) {
        self.phase = FormPhase::DialogOpen {
            order_id: order_id.to_string(),
        };
    }

    /// Record that the registration reached the store.
    pub fn mark_persisted(&mut self) {
        self.phase = FormPhase::Persisted;
    }
}
