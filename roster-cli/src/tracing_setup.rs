//! Tracing setup for the roster CLI
//!
//! Usage:
//!   roster --debug ...             # Debug logging to stderr
//!   RUST_LOG=roster_db=debug roster # Fine-grained log control
//!
//! Logs always go to stderr so `--format json` output stays clean on stdout.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Default level from the config file, used when RUST_LOG is not set
    pub level: Option<String>,
}

impl TracingConfig {
    fn default_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            self.level.as_deref().unwrap_or("info")
        }
    }
}

pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
