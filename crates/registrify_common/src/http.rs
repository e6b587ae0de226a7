// --- File: crates/registrify_common/src/http.rs ---
//! Shared HTTP utilities.

// Include the client module
pub mod client;
