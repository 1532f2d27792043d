//! Tracing subscriber setup for the command-line binary.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `verbose` forces debug output for this crate; otherwise `RUST_LOG` is
/// honored and defaults to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("assembly_bump=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init: a global subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
