//! Logging setup.
//!
//! Records go to stderr through `env_logger`. `RUST_LOG` overrides the
//! default filter. Passwords are never logged.

use env_logger::{Builder, Env, Target};

/// Install the global logger. Quiet mode only lets errors through.
pub fn init(quiet: bool) {
    let default_filter = if quiet { "error" } else { "warn" };

    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .target(Target::Stderr)
        .try_init();
}
