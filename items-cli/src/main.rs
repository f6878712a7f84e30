//! items CLI - record management web application
//!
//! Entry point for the `items` binary:
//! - `serve`: run the HTTP server
//! - `init-db`: create the items table without starting the server
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so every `env = ...` option below can be set there.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "items",
    author,
    version,
    about = "Create, list, edit and delete item records through a small web UI"
)]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, short = 'd', global = true, env = "DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema if it is missing, then exit
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }

    Ok(())
}
