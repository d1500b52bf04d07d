//! Logging setup for the CLI.
//!
//! Results go to stdout; log events go to stderr so they never mix with
//! table or JSON output. `RUST_LOG` overrides the `-v` count.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter directive.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
