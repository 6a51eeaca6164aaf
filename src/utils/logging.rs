use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` (from `--log-level`) or
/// [`LOG_LEVEL`](crate::utils::consts::LOG_LEVEL).
pub fn init_logging(level: Option<&str>) {
    let fallback = level.unwrap_or(crate::utils::consts::LOG_LEVEL);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::utils::consts::LOG_LEVEL));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
