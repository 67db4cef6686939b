// berinsight/crates/berinsight/src/telemetry.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when RUST_LOG is unset: our own crate at info, plus the
/// HTTP trace layer.
const DEFAULT_FILTER: &str = "berinsight=info,tower_http=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .compact()
        .finish();

    // Both binaries call this; a second call is a no-op.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
