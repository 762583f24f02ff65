//! API Error Handling
//!
//! Unified error types and conversion for API responses. Error bodies are
//! plain text carrying the underlying message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::pipeline_service::PipelineError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // Duplicate ids surface as a store failure
            ApiError::Conflict(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, message).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PipelineError::Conflict(_) => ApiError::Conflict(err.to_string()),
            PipelineError::ValidationError(msg) => ApiError::BadRequest(msg),
            PipelineError::Repository(err) => ApiError::InternalError(err.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_status() {
        let cases = [
            (PipelineError::NotFound("p".into()), StatusCode::NOT_FOUND),
            (
                PipelineError::Conflict("p".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PipelineError::ValidationError("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PipelineError::Repository(sqlx::Error::PoolTimedOut.into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
