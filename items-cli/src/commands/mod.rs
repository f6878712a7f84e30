//! Command implementations for the items CLI

pub mod init_db;
pub mod serve;

use clap::Args;
use items_server::config::DEFAULT_DATABASE_URL;

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Backing store options shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL, hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}
