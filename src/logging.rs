//! Log output for the command line tools.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber that writes human-readable logs to stderr.
///
/// The `RUST_LOG` environment variable takes precedence over
/// `default_directive` (e.g. `"info"` or `"accounter_core=debug"`).
/// Stdout is left alone so it can carry the tool's actual output.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn setup_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).init();
}
