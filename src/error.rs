// src/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::types::ErrorResponse;
use crate::core::auth::AuthError;
use crate::core::store::StoreError;

/// Every failure a request can end in.
///
/// Validation and authorization failures are reported back to the caller,
/// a missing credential file is usually absorbed before it gets here, and
/// I/O failures surface as a generic server error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound(e.to_string()),
            StoreError::Io(_) => AppError::Io(e.to_string()),
            StoreError::DuplicateUsername(_) | StoreError::InvalidField { .. } => {
                AppError::Validation(e.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Store(inner) => inner.into(),
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Invalid username or password".to_string())
            }
            AuthError::SessionExpired | AuthError::InvalidSession | AuthError::JwtError(_) => {
                AppError::Unauthorized(format!("Authorization required: {}", e))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn store_errors_map_onto_the_taxonomy() {
        let dup: AppError = StoreError::DuplicateUsername("alice".into()).into();
        assert!(matches!(dup, AppError::Validation(_)));

        let io_err: AppError = StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk")).into();
        assert_eq!(io_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing: AppError = StoreError::NotFound("users.txt".into()).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_credentials_are_unauthorized() {
        let err: AppError = AuthError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Invalid username or password");
    }
}
