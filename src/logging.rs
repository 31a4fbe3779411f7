use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only rename notices.
///
/// Defaults to `warn`; override with `RUST_LOG`, e.g. `RUST_LOG=debug enable-files`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
