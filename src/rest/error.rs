use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::storage::StoreError;

/// Request failure as seen by HTTP clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("sighting with UUID {0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("sighting with UUID {0} is deleted")]
    FailedPrecondition(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::FailedPrecondition(_) => StatusCode::CONFLICT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ApiError::FailedPrecondition(_) => "FAILED_PRECONDITION",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::AlreadyDeleted(id) => ApiError::FailedPrecondition(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("Request rejected ({}): {}", self.code(), self);
        (
            self.status(),
            Json(ErrorResponse {
                code: self.code().to_string(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
