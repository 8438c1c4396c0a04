//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Diagnostics go to stderr so stdout stays free for user-facing pipeline
/// messages. `RUST_LOG` overrides the default level; `--verbose` raises
/// the default from `info` to `debug`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
