//! Diagnostic logging for the CLI.
//!
//! Engine events go through `tracing`; this installs a stderr fmt subscriber
//! filtered by `RUST_LOG`, falling back to `warn` (or `debug` with `--verbose`).
//! Hand histories are written separately and never pass through here.

use tracing_subscriber::EnvFilter;

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Later calls are no-ops, so `run` can be
/// invoked many times in one process.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
