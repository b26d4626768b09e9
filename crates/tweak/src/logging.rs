//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// The level used when `RUST_LOG` is not set.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber unless one is already set.
///
/// `RUST_LOG` overrides the flags.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(error = %err, "keeping the existing subscriber");
    }
}
