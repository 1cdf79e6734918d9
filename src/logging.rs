use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "salama=info,tower_http=info";

/// Logs go to stderr so `invoke` can keep stdout for the response.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a second init (tests, embedding) is fine to ignore
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
