//! Diagnostic logging to stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Filter variable, e.g. `PASSGEN_LOG=debug`.
pub const LOG_ENV: &str = "PASSGEN_LOG";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let format = tracing_subscriber::fmt::format()
        .with_ansi(false)
        .without_time();

    let layer = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
    tracing::debug!("tracing initialized");
}
