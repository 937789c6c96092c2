//! `tracing` subscriber setup for binaries and tests embedding the pool.
//!
//! The engine itself only emits events; installing a subscriber is the
//! embedder's choice.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Maps a `LOGLEVEL` value to a [`Level`], case-insensitively.
/// Anything unrecognised falls back to `INFO`.
#[must_use]
pub fn parse_level(value: &str) -> Level {
    match value.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs a global fmt subscriber once per process.
///
/// Environment variables:
/// - `LOGLEVEL`: `TRACE`, `DEBUG`, `INFO` (default), `WARN` or `ERROR`.
/// - `RUST_LOG`: extra `EnvFilter` directives, e.g. `hydra_pair=trace`.
///
/// Later calls are no-ops, and an already-installed global subscriber is
/// left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string()));

        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(true),
            )
            .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
            .try_init();

        match installed {
            Ok(()) => tracing::debug!("Log level set to: {}", level),
            Err(err) => tracing::debug!(%err, "global subscriber already installed"),
        }
    });
}
