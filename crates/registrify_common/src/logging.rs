//! Logging utilities for the Registrify application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Registrify application. It initializes the tracing subscriber once
//! at startup; everything else just uses the `tracing` macros.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// Call once at the start of the application. Respects `RUST_LOG` style
/// directives from the environment on top of the default.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// # Arguments
///
/// * `level` - The minimum log level to display for registrify crates.
pub fn init_with_level(level: Level) {
    // RUST_LOG wins when set; otherwise everything logs at `level`.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // try_init so tests that initialize twice do not panic
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
