use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::db::error::DatabaseError;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ApiResponse;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Persistence(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidInput(_) | ServiceError::Persistence(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<DatabaseError> for ServiceError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(_) => ServiceError::NotFound(err.to_string()),
            other => ServiceError::Persistence(other.to_string()),
        }
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

impl From<BytesRejection> for ServiceError {
    fn from(rejection: BytesRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ServiceError::Persistence(msg) => error!("Persistence error: {}", msg),
            ServiceError::NotFound(msg) => warn!("Not found: {}", msg),
            ServiceError::InvalidInput(msg) => warn!("Invalid input: {}", msg),
        }

        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
