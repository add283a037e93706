use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, logging to stderr.
///
/// An unparsable `filter` falls back to `warn`. Calling this again is a no-op.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
