use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::types::ErrorResponse;
use crate::core::validation::ValidationError;
use crate::domain::ports::PredictionError;

/// Request-scoped error. Every variant renders as a JSON `{"error": ...}`
/// envelope; nothing escapes a handler unformatted.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Company is required")]
    MissingCompany,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCompany | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Prediction(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::MissingCompany.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Validation(ValidationError::InvalidModel).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Prediction(PredictionError::UnknownLevel {
                column: "name",
                value: "Civic".to_string(),
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(ApiError::MissingCompany.to_string(), "Company is required");
        assert_eq!(
            ApiError::Validation(ValidationError::MissingField("year")).to_string(),
            "Missing field: year"
        );
    }
}
