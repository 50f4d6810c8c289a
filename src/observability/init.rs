//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the configuration names one.
const DEFAULT_LEVEL: &str = "warn";

/// Resolves the log filter from `RUST_LOG`, then `config.trace_level`.
///
/// Invalid directives fall back to [`DEFAULT_LEVEL`] rather than failing
/// startup.
#[must_use]
pub fn build_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the tracing subscriber with a fmt layer on stderr.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the resolved level (see [`build_filter`])
/// 2. Formats them as compact single lines without ANSI colors
/// 3. Writes to stderr
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes effect).
/// Tests and embedding applications that install their own subscriber are not
/// affected.
///
/// # Example
///
/// ```rust
/// use dimoss_catalog::observability::init_tracing;
/// use dimoss_catalog::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt_layer)
        .try_init();
}
