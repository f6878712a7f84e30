//! Create the items table and exit

use anyhow::{Context, Result};
use clap::Parser;
use items_server::{display_dsn, Store};

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the schema if it is missing. Existing rows are left alone.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let dsn_display = display_dsn(&args.database.database_url);

    let store = Store::connect_with(&args.database.database_url, args.database.max_connections)
        .await
        .with_context(|| format!("Failed to connect to {}", dsn_display))?;
    store
        .create_schema_if_absent()
        .await
        .context("Failed to create schema")?;
    store.close().await;

    tracing::info!("Schema ready in {}", dsn_display);
    Ok(())
}
