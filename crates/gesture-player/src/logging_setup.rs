use crate::config::{DEFAULT_LOG_FILTER, LoggingConfig};

use tracing::warn;
use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter when set. A configured filter
/// that does not parse falls back to the default and is reported once the
/// subscriber is up.
pub(crate) fn init_tracing(logging: &LoggingConfig) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => configured_filter(&logging.filter),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }

    if let Some(e) = rejected {
        warn!(
            filter = %logging.filter,
            error = %e,
            fallback = DEFAULT_LOG_FILTER,
            "Invalid logging.filter, using default"
        );
    }
}

/// Parse `directives`, falling back to the default filter on error.
pub(crate) fn configured_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    }
}
