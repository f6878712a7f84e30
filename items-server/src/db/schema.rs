//! Table creation for the items catalogue

use sqlx::AnyPool;

use super::{Backend, StoreError};

/// `items` table on SQLite. Length and range limits are enforced by the engine
/// so that oversize names or prices fail at write time instead of being
/// truncated.
pub const SQLITE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(120) NOT NULL CHECK (length(name) <= 120),
    description TEXT,
    price NUMERIC(10, 2) CHECK (price IS NULL OR (price >= 0 AND price < 100000000))
)
"#;

/// `items` table on PostgreSQL. `BIGSERIAL` never hands out a used id again.
pub const POSTGRES_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(120) NOT NULL CHECK (length(name) <= 120),
    description TEXT,
    price NUMERIC(10, 2) CHECK (price IS NULL OR (price >= 0 AND price < 100000000))
)
"#;

pub fn items_table(backend: Backend) -> &'static str {
    match backend {
        Backend::Sqlite => SQLITE_ITEMS_TABLE,
        Backend::Postgres => POSTGRES_ITEMS_TABLE,
    }
}

/// Create the schema unless it already exists. Never drops or rewrites data.
pub async fn create_if_absent(pool: &AnyPool, backend: Backend) -> Result<(), StoreError> {
    tracing::info!(?backend, "Ensuring items schema exists");
    sqlx::query(items_table(backend)).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_table_has_no_sqlite_keywords() {
        let ddl = items_table(Backend::Postgres);
        assert!(ddl.contains("BIGSERIAL"));
        assert!(!ddl.contains("AUTOINCREMENT"));
        assert!(items_table(Backend::Sqlite).contains("AUTOINCREMENT"));
    }
}
