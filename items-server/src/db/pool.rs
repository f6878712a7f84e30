//! Storage gateway - connection pool management
//!
//! Uses an sqlx `AnyPool` with explicit connection limits, so the same gateway
//! serves an embedded SQLite file or a PostgreSQL server depending on the
//! scheme of the connection string. Every pooled connection is pinged before it
//! is handed out again, so connections dropped by the engine are replaced
//! instead of failing the request.

use std::borrow::Cow;
use std::time::Duration;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use super::{schema, Session, StoreError};
use crate::config::display_dsn;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Run on every new SQLite connection. Journal mode is stored in the file,
/// busy timeout is per connection.
const SQLITE_PRAGMAS: &[&str] = &[
    "PRAGMA journal_mode = WAL",
    "PRAGMA busy_timeout = 5000",
    "PRAGMA foreign_keys = ON",
];

/// Engine behind a connection string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Pick the engine from the URL scheme.
    pub fn from_url(database_url: &str) -> Result<Self, StoreError> {
        let scheme = database_url
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .unwrap_or_default();

        match scheme.as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(StoreError::UnsupportedUrl {
                url: display_dsn(database_url),
            }),
        }
    }
}

/// Entry point to the backing store. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: AnyPool,
    backend: Backend,
}

impl Store {
    /// Connect with the default pool size.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::connect("sqlite://app.db").await?;
    /// store.create_schema_if_absent().await?;
    /// ```
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        Self::connect_with(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Connect with a custom pool size. Fails if the first connection cannot
    /// be established.
    pub async fn connect_with(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let backend = Backend::from_url(database_url)?;
        sqlx::any::install_default_drivers();

        let pool = pool_options(backend, max_connections)
            .connect(&connect_url(backend, database_url))
            .await?;
        Ok(Self { pool, backend })
    }

    /// Build the pool without connecting. Connection errors surface on first use.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let backend = Backend::from_url(database_url)?;
        sqlx::any::install_default_drivers();

        let pool = pool_options(backend, max_connections)
            .connect_lazy(&connect_url(backend, database_url))?;
        Ok(Self { pool, backend })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Open a unit of work bound to one pooled connection.
    pub async fn session(&self) -> Result<Session, StoreError> {
        Session::begin(&self.pool).await
    }

    /// Create the `items` table if it does not exist. Safe to call repeatedly.
    pub async fn create_schema_if_absent(&self) -> Result<(), StoreError> {
        schema::create_if_absent(&self.pool, self.backend).await
    }

    /// Close every connection. Later sessions fail with a pool-closed error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// SQLite files are created on first connect unless the URL picks its own mode.
fn connect_url(backend: Backend, database_url: &str) -> Cow<'_, str> {
    if backend != Backend::Sqlite
        || database_url.contains(":memory:")
        || database_url.contains("mode=")
    {
        return Cow::Borrowed(database_url);
    }

    let separator = if database_url.contains('?') { '&' } else { '?' };
    Cow::Owned(format!("{}{}mode=rwc", database_url, separator))
}

fn pool_options(backend: Backend, max_connections: u32) -> AnyPoolOptions {
    AnyPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .test_before_acquire(true)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if backend == Backend::Sqlite {
                    for pragma in SQLITE_PRAGMAS {
                        sqlx::query(pragma).execute(&mut *conn).await?;
                    }
                }
                Ok(())
            })
        })
}
