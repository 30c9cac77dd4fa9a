//! Error types for the to-do service.
//!
//! # Design
//! `NotFound` is the only error the business rules raise. Store failures are
//! wrapped in `Repository` and surface as a bare 500; neither variant writes a
//! response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures reported by a `ToDoRepository` implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors returned by `ToDoService` operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The id does not refer to any stored item.
    #[error("to-do item {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { .. } => tracing::warn!(error = %self, "request rejected"),
            Self::Repository(_) => tracing::error!(error = %self, "store failure"),
        }
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ServiceError::not_found(42);
        assert!(matches!(err, ServiceError::NotFound { id: 42 }));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "to-do item 42 not found");
    }

    #[test]
    fn repository_error_maps_to_500() {
        let err = ServiceError::from(RepositoryError::from(sqlx::Error::RowNotFound));
        assert!(matches!(err, ServiceError::Repository(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_response_has_status_only() {
        let response = ServiceError::not_found(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(axum::http::header::CONTENT_TYPE).is_none());
    }
}
