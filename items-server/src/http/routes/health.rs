//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{Store, StoreError};
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// GET /healthz - trivial read against the store
async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match check(state.store()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                detail: None,
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "error",
                    detail: Some(err.to_string()),
                }),
            )
        }
    }
}

async fn check(store: &Store) -> Result<(), StoreError> {
    let mut session = store.session().await?;
    let outcome = session.ping().await;
    session.finish(outcome).await
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
