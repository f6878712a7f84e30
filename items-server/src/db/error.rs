//! Storage error type

/// Failure talking to the backing store, or a missing record.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The engine rejected the statement or transaction, or is unreachable
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Connection string names an engine this build cannot talk to
    #[error("unsupported database URL '{url}' (expected sqlite: or postgres:)")]
    UnsupportedUrl { url: String },
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
