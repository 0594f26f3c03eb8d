//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already set.
pub fn setup_logging() -> Result<(), TryInitError> {
    setup_logging_with(DEFAULT_DIRECTIVE)
}

/// Like [`setup_logging`], with an explicit fallback directive.
pub fn setup_logging_with(default_directive: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}
