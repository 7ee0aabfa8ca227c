//! Diagnostic logging to stderr.
//!
//! stdout carries the listing, so logs always go to stderr. The filter comes
//! from, in order: `--log-level`/`EC2LS_LOG`, `RUST_LOG`, the `-v` count,
//! and finally `warn`.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Logging choices from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Explicit level or filter directive
    pub level: Option<String>,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl LoggingConfig {
    /// Filter directive to use, given the value of `RUST_LOG`.
    pub fn directive(&self, rust_log: Option<&str>) -> String {
        if let Some(level) = self.level.as_deref().filter(|l| !l.is_empty()) {
            return level.to_string();
        }
        if let Some(env) = rust_log.filter(|l| !l.is_empty()) {
            return env.to_string();
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = config.directive(rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("invalid log filter '{directive}': {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
