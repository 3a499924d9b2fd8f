use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;

/// Errors surfaced by the HTTP layer
///
/// The engine itself never fails; everything here is a boundary rejection of
/// a request the handlers refuse to forward to it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("too many postings: {count} exceeds the limit of {limit}")]
    TooManyPostings { count: usize, limit: usize },
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidPayload(_) => "invalid_payload",
            ApiError::TooManyPostings { .. } => "too_many_postings",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_map_to_bad_request() {
        let err = ApiError::TooManyPostings { count: 6000, limit: 5000 };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("6000"));
    }
}
