//! Logging setup for the CLI binary.
//!
//! Library code logs through `tracing` macros and never installs a
//! subscriber; the binary calls [`init_tracing`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to crate-scoped debug output.
/// Should be called once at application startup.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tonespan=debug,info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
