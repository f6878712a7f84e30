//! Unit of work over one pooled connection
//!
//! A `Session` wraps an open transaction. Nothing is durable until `commit`.
//! Dropping a session on any path (early return, `?`, panic unwinding) rolls
//! back pending writes and hands the connection back to the pool.

use sqlx::any::Any;
use sqlx::{AnyConnection, AnyPool};
use sqlx::Transaction;

use super::StoreError;

pub struct Session {
    tx: Transaction<'static, Any>,
}

impl Session {
    pub(crate) async fn begin(pool: &AnyPool) -> Result<Self, StoreError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection for repository queries. Statements run inside the open
    /// transaction.
    pub fn conn(&mut self) -> &mut AnyConnection {
        &mut self.tx
    }

    /// Run a raw statement without committing. Returns rows affected.
    pub async fn execute(&mut self, statement: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(statement).execute(&mut *self.tx).await?;
        Ok(result.rows_affected())
    }

    /// Trivial read, used by the health check.
    pub async fn ping(&mut self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&mut *self.tx).await?;
        Ok(())
    }

    /// Make pending writes durable.
    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discard pending writes.
    pub async fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Release the session without committing.
    pub async fn close(self) -> Result<(), StoreError> {
        self.rollback().await
    }

    /// Commit if `outcome` succeeded, roll back otherwise.
    ///
    /// The outcome's error wins over a failed rollback; the rollback failure
    /// is logged. A failed commit is returned as the error.
    pub async fn finish<T>(self, outcome: Result<T, StoreError>) -> Result<T, StoreError> {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
