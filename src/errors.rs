use crate::validators::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
///
/// Webhook delivery problems are not represented here; they surface as a
/// `DeliveryOutcome` and never fail a request.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Request body is not valid JSON.
    MalformedBody(String),
    /// Submission failed validation.
    Validation(ValidationError),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MalformedBody(msg) => write!(f, "Malformed body: {}", msg),
            AppError::Validation(e) => write!(f, "Validation failed: {}", e),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Status code and the message the wizard displays.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                "Cuerpo de la petición no es JSON válido.".to_string(),
            ),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor.".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an `{ok: false, error}` JSON response.
    ///
    /// Client errors are logged at warn level, internal errors at error level
    /// with their detail (which is never sent to the client).
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        match &self {
            AppError::InternalError(detail) => tracing::error!("Internal error: {}", detail),
            AppError::MalformedBody(detail) => {
                tracing::warn!("Rejected malformed body: {}", detail)
            }
            AppError::Validation(e) => tracing::warn!("Rejected submission: {}", e),
        }

        let body = Json(json!({
            "ok": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    /// Converts a `ValidationError` into an `AppError`.
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<serde_json::Error> for AppError {
    /// Converts a JSON parse error into an `AppError`.
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}
