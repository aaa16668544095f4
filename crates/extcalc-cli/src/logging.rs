use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stderr.
///
/// Level comes from `RUST_LOG` (default: warn), e.g. `RUST_LOG=extcalc_core=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
