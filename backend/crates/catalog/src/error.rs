//! Catalog Error Types

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ALL_FIELDS_REQUIRED;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{}", ALL_FIELDS_REQUIRED)]
    MissingFields,

    #[error("{0}")]
    Validation(String),

    #[error("product not found")]
    NotFound,

    /// Role check failed (or any other auth-layer failure)
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MissingFields | CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::NotFound => ErrorKind::NotFound,
            CatalogError::Auth(e) => e.kind(),
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            CatalogError::Auth(e) => e.into_app_error(),
            CatalogError::Database(e) => AppError::from(e),
            CatalogError::Internal(msg) => AppError::internal("internal server error")
                .with_source(std::io::Error::other(msg)),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => tracing::error!(error = %e, "Catalog database error"),
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error")
            }
            CatalogError::Auth(e) => tracing::warn!(error = %e, "Catalog access denied"),
            _ => tracing::debug!(error = %self, "Catalog error"),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
