//! Error handling - every failure converts to the response envelope.

use std::fmt;

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};

use blog_core::error::{RepoError, ValidationError};
use blog_shared::Envelope;

/// Application-level error type that converts to envelope responses.
///
/// The carried strings are client-facing and deliberately coarse; raw
/// storage detail is logged where the error is constructed and never
/// reaches the wire.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(Vec<String>),
    UnsupportedMedia(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl AppError {
    /// Wrap a storage failure: full detail to the log, a stable coarse
    /// message to the client.
    pub fn storage(err: RepoError, client_message: &str) -> Self {
        tracing::error!(error = %err, "{client_message}");
        AppError::Internal(client_message.to_owned())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
            AppError::UnsupportedMedia(msg) => write!(f, "Unsupported media: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMedia(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(errors) => errors.join(", "),
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::UnsupportedMedia(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Internal(msg) => msg.clone(),
        };

        HttpResponse::build(self.status_code()).json(Envelope::fail(message))
    }
}

/// Handler for `web::JsonConfig`: actix's default answer to a body that
/// fails deserialization is a bare string, not the envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected malformed JSON body");
    AppError::BadRequest("Invalid request body.".to_owned()).into()
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.errors)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
