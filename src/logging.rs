//! tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise the more verbose of `-v` and the
//! configured default (`[log] level`, `warn` unless changed) applies. Log
//! lines go to stderr so the rendered view on stdout stays clean.

use tracing::Level;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Filter directive for a `-v` count and the configured default level.
///
/// `-v` never lowers a plain configured level. A configured directive
/// that is not a bare level (e.g. `userdesk=debug`) yields to `-v`.
pub fn filter_directive(verbosity: u8, default_level: &str) -> String {
    let requested = match verbosity {
        0 => return default_level.to_string(),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    match default_level.trim().parse::<Level>() {
        Ok(configured) if configured > requested => default_level.to_string(),
        _ => requested.as_str().to_ascii_lowercase(),
    }
}

/// Build the env filter, falling back to `warn` for unparsable directives.
pub fn build_filter(verbosity: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(filter_directive(verbosity, default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbosity: u8, default_level: &str) -> Result<(), TryInitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_filter(verbosity, default_level))
        .try_init()
}
