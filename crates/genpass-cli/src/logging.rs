//! Diagnostic logging to stderr.
//!
//! Filter precedence: GENPASS_LOG, then `-v`/`-vv`, then `[logging] level`
//! from the config file, then `warn`. Stdout stays reserved for results.

use tracing_subscriber::EnvFilter;

use crate::constants::env_vars;

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: u8, config_level: Option<&str>) {
    let filter = EnvFilter::try_from_env(env_vars::LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, config_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: u8, config_level: Option<&str>) -> String {
    match verbose {
        0 => config_level
            .filter(|level| !level.trim().is_empty())
            .unwrap_or("warn")
            .to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}
