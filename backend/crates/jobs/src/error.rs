//! Job Board Error Types

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ALL_FIELDS_REQUIRED;
use thiserror::Error;

pub type JobResult<T> = Result<T, JobError>;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{}", ALL_FIELDS_REQUIRED)]
    MissingFields,

    #[error("{0}")]
    Validation(String),

    #[error("job not found")]
    NotFound,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl JobError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JobError::MissingFields | JobError::Validation(_) => ErrorKind::BadRequest,
            JobError::NotFound => ErrorKind::NotFound,
            JobError::Auth(e) => e.kind(),
            JobError::Database(_) | JobError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            JobError::Auth(e) => e.into_app_error(),
            JobError::Database(e) => AppError::from(e),
            JobError::Internal(msg) => AppError::internal("internal server error")
                .with_source(std::io::Error::other(msg)),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            JobError::Database(e) => tracing::error!(error = %e, "Job board database error"),
            JobError::Internal(msg) => tracing::error!(message = %msg, "Job board internal error"),
            JobError::Auth(e) => tracing::warn!(error = %e, "Job board access denied"),
            _ => tracing::debug!(error = %self, "Job board error"),
        }
    }
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
