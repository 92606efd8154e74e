use tracing_subscriber::{EnvFilter, fmt};

use crate::utils::consts::{LOG_LEVEL, VERBOSE_LOG_LEVEL};

/// Logs go to stderr; stdout is reserved for the decoded message.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { VERBOSE_LOG_LEVEL } else { LOG_LEVEL };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
