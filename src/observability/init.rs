//! Tracing initialization and subscriber setup.
//!
//! This module configures the global `tracing` subscriber for hosts that want
//! the card's spans and events on stderr. Embedding hosts with their own
//! subscriber simply skip this and the card's instrumentation flows into
//! whatever they installed.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a level filter.
///
/// The filter is taken from the `RUST_LOG` environment variable when set,
/// falling back to the provided level, then to `"info"`.
///
/// Idempotent: only the first call installs a subscriber, later calls are
/// no-ops.
///
/// # Example
///
/// ```
/// use listcard::observability::init_tracing;
///
/// init_tracing(Some("debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
