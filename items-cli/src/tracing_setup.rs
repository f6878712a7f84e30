//! Tracing setup for the items CLI
//!
//! Usage:
//!   items serve                      # info-level logs
//!   items --debug serve              # debug-level logs
//!   RUST_LOG=items_server=debug items serve
//!
//! Environment variables:
//!   RUST_LOG                         # Log filter (wins over --debug)
//!   DEBUG                            # Same as --debug

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level when RUST_LOG is unset
    pub debug: bool,
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
