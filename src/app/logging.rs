//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `reuseit=debug`.
pub const LOG_ENV: &str = "REUSEIT_LOG";

/// Install the stderr subscriber.
///
/// `verbose` forces debug output; otherwise `REUSEIT_LOG` applies, defaulting to
/// warnings only. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("reuseit=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
