//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from this crate with `verbose`. Logs go to stderr so they never
/// mix with game output on stdout.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "wordle_referee=debug"
    } else {
        "wordle_referee=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
