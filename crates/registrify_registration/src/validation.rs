// --- File: crates/registrify_registration/src/validation.rs ---
//! Pure field validators for the registration form.
//!
//! Both checks are total functions over arbitrary strings and perform no
//! normalization: no trimming, no country-code handling, inputs are checked
//! as-is.

use std::fmt;

/// Form fields that can carry a validation error. The string form matches
/// the input names of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Age,
    Email,
    MobileNumber,
    FoodType,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Age => "age",
            Field::Email => "email",
            Field::MobileNumber => "mobilenumber",
            Field::FoodType => "foodType",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str = "Please enter a 10-digit mobile number";
pub const NAME_ERROR: &str = "Please enter your name";
pub const AGE_ERROR: &str = "Please enter your age";
pub const FOOD_TYPE_ERROR: &str = "Please choose a food preference";

/// Check an email address for the shape
/// `<non-space-non-@>+ '@' <non-space-non-@>+ '.' <non-space-non-@>+`.
///
/// Exactly one `@`; the domain part must contain a `.` with at least one
/// character either side. No attempt at full RFC 5322 parsing, on purpose.
pub fn validate_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }

    // A dot with non-empty segments either side of it.
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

/// Check a mobile number: exactly 10 ASCII digits, first digit 6-9
/// (Indian mobile numbering).
pub fn validate_phone(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().all(|b| b.is_ascii_digit())
        && matches!(bytes[0], b'6'..=b'9')
}
