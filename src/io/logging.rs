//! Logger setup for the command-line tool

use env_logger::Env;

/// Install the global logger
///
/// Defaults to warnings only, or everything down to debug level in debug
/// mode. `RUST_LOG` overrides either default. Returns `false` if a logger was
/// already installed.
pub fn init_logging(debug: bool) -> bool {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
        .is_ok()
}
