//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::db::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Store,
    cookie_key: Key,
    database_display: String,
}

impl AppState {
    /// `secret_key` may be any length; it is stretched to a 64-byte signing key.
    pub fn new(store: Store, secret_key: &str, database_display: impl Into<String>) -> Self {
        let digest = Sha512::digest(secret_key.as_bytes());
        Self {
            inner: Arc::new(AppStateInner {
                store,
                cookie_key: Key::from(digest.as_slice()),
                database_display: database_display.into(),
            }),
        }
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Masked connection string shown in the page footer
    pub fn database_display(&self) -> &str {
        &self.inner.database_display
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.inner.cookie_key.clone()
    }
}
