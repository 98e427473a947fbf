//! Diagnostic logging for the command-line front end.
//!
//! Configure via the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=soy_outline_lib=debug` to see per-build row counts. Output goes to
//! stderr so stdout stays usable for JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // A second init (tests, embedding hosts) keeps the existing subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
