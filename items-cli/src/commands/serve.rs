//! HTTP server command
//!
//! Runs the items web application until Ctrl+C or SIGTERM.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use items_server::config::{AppConfig, DEFAULT_SECRET_KEY};
use items_server::run_server;

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Host or address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Key used to sign flash-message cookies
    #[arg(long, env = "SECRET_KEY", default_value = DEFAULT_SECRET_KEY, hide_env_values = true)]
    pub secret_key: String,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,
}

impl ServeArgs {
    fn bind_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))?
            .next()
            .with_context(|| format!("{} did not resolve to an address", self.host))
    }

    fn into_config(self) -> Result<AppConfig> {
        Ok(AppConfig {
            bind_addr: self.bind_addr()?,
            database_url: self.database.database_url,
            secret_key: self.secret_key,
            max_connections: self.database.max_connections,
            request_timeout: Duration::from_secs(self.timeout),
        })
    }
}

/// Startup log line. Credentials in the connection string are masked.
fn startup_message(config: &AppConfig) -> String {
    format!(
        "Running on http://{} (DB: {})",
        config.bind_addr,
        config.database_url_display()
    )
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    if args.secret_key == DEFAULT_SECRET_KEY {
        tracing::warn!("SECRET_KEY is not set; using the development default");
    }

    let config = args.into_config()?;
    tracing::info!("{}", startup_message(&config));

    // Blocks until shutdown
    run_server(config).await.context("Server error")?;

    Ok(())
}
