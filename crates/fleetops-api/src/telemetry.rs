//! Tracing initialization.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber: env-filtered, formatted output. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "fleetops_api=debug,fleetops_db=debug,fleetops_ingest=debug,tower_http=debug,axum::rejection=trace"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
