//! Error responses for page routes
//!
//! Mutating routes report every outcome through flash + redirect. Read routes
//! that cannot render a page answer with an HTML error page instead.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::StoreError;
use crate::views;

#[derive(Debug)]
pub enum HttpError {
    /// Unknown route parameter or record (404)
    NotFound,

    /// Backing store failed (500, logged)
    Persistence(StoreError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Item not found".to_string()),
            Self::Persistence(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

impl From<StoreError> for HttpError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound,
            _ => Self::Persistence(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_404() {
        let response = HttpError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn persistence_is_500_with_cause() {
        let err = HttpError::from(StoreError::from(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Database error"));
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err = HttpError::from(StoreError::not_found("item", 3));
        assert!(matches!(err, HttpError::NotFound));
    }
}
