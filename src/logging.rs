//! Diagnostic tracing for the roster.
//!
//! Operator-facing messages go through the prompt on stdout. Tracing is for
//! debugging only and always writes to stderr so it never interleaves with
//! a prompt line.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "roster=debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; otherwise `warn`, or `roster=debug` with `--verbose`.
///
/// # Example
/// ```bash
/// RUST_LOG=roster=info roster
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
