// --- File: crates/registrify_common/src/error.rs ---

/// A trait for converting errors to HTTP status codes.
///
/// Each crate defines its own `thiserror` enum and implements this trait to
/// state the status its variants map to; the crate owning the HTTP surface
/// turns that into a response.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}
