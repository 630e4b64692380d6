// Structured logging via `tracing`. Logs go to stderr so they never mix
// with the prompt output; the level is controlled through RUST_LOG.
//
//     RUST_LOG=debug users-app

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Only warnings and errors are shown
/// unless RUST_LOG says otherwise.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
