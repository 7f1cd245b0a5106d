//! Installation of the global `tracing` subscriber.

use {
    std::sync::Once,
    tracing_subscriber::{EnvFilter, fmt},
};

/// Environment variable that overrides the filter passed to [`initialize`].
pub const FILTER_ENV: &str = "LOG_FILTER";

static INIT: Once = Once::new();

/// Installs a formatting subscriber filtered by `env_filter`, unless the
/// `LOG_FILTER` environment variable provides a filter of its own.
///
/// Only the first call has an effect, so tests and binaries may call this
/// freely.
pub fn initialize(env_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| env_filter.into());
        // Another subscriber may already be installed by the host application.
        if fmt::fmt().with_env_filter(filter).try_init().is_err() {
            ::tracing::debug!("global subscriber already installed");
        }
    });
}
