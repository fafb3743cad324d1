//! Log setup for the binary.
//!
//! Library crates only emit `tracing` events; this installs the subscriber
//! that prints them to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `echofield_palette=debug`.
pub const LOG_ENV: &str = "ECHOFIELD_LOG";

/// Directive implied by the number of `-v` flags.
pub fn level_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// `-v` wins; otherwise [`LOG_ENV`]; otherwise `warn`.
pub fn env_filter(verbose: u8) -> EnvFilter {
    if verbose == 0 {
        if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
            return filter;
        }
    }
    EnvFilter::new(level_directive(verbose))
}

pub fn init(verbose: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}
