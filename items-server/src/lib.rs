//! items-server: record management over HTTP
//!
//! Lists, creates, edits and deletes `Item` records through server-rendered
//! HTML pages backed by a single relational table.
//!
//! Layers, leaf first:
//! - `db`: storage gateway (pool, schema, sessions) and the item repository
//! - `models`: the `Item` entity and form validation
//! - `http`: router, handlers, flash messages
//! - `views`: pure functions from page data to markup

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod views;

pub use config::{display_dsn, AppConfig};
pub use db::{Session, Store, StoreError};
pub use http::{build_router, run_server};
pub use state::AppState;
