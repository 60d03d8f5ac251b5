// src/logging.rs
// =============================================================================
// Sets up tracing output for the CLI.
//
// Logs go to stderr so that `--json` output on stdout stays machine-readable.
// The level comes from RUST_LOG when set (e.g. RUST_LOG=web_analyzer=trace),
// otherwise from the --verbose flag.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "web_analyzer=debug"
    } else {
        "web_analyzer=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
