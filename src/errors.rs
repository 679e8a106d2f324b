use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::logging::ContactEvent;
use crate::models::FieldErrors;

/// Centralized application error type that provides consistent JSON error
/// responses. Every variant here is a client error; the handlers have no
/// internal failure modes of their own.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed for {}", .0.field_list())]
    Validation(FieldErrors),

    #[error("malformed form payload: {0}")]
    MalformedBody(String),

    #[error("unsupported media type: expected application/x-www-form-urlencoded")]
    UnsupportedMediaType,

    #[error("request body too large")]
    PayloadTooLarge,
}

/// Standard JSON error response structure
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Validation failures expose the per-field message map under `errors`.
#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    errors: &'a FieldErrors,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn log_error(&self) {
        match self {
            AppError::Validation(errors) => {
                crate::log_contact_event!(
                    ContactEvent::SubmissionRejected,
                    fields = %errors.field_list(),
                    count = errors.len(),
                    "Contact submission rejected"
                );
            }
            AppError::MalformedBody(_) => {
                crate::log_contact_event!(
                    ContactEvent::MalformedSubmission,
                    error = %self,
                    "Unparseable contact submission"
                );
            }
            other => {
                tracing::warn!(
                    error = %other,
                    status_code = %other.status_code(),
                    "Client error"
                );
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before converting to response
        self.log_error();

        let status = self.status_code();
        match self {
            AppError::Validation(errors) => {
                (status, Json(ValidationResponse { errors: &errors })).into_response()
            }
            other => {
                let body = Json(ErrorResponse {
                    error: other.to_string(),
                });
                (status, body).into_response()
            }
        }
    }
}
