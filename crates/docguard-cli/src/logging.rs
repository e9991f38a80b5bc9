//! Diagnostic logging for the `docguard` binary.
//!
//! Log events go to stderr through `tracing-subscriber`. They are separate from the
//! console verdict output, which is plain text on stdout/stderr.

use tracing_subscriber::EnvFilter;

/// Variable holding an `EnvFilter` directive; takes precedence over `-v`.
pub const LOG_ENV: &str = "DOCGUARD_LOG";

/// Maps `-v` occurrences to a tracing directive (saturates at `trace`).
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Repeated calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
