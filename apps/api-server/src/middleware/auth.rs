//! Identity verification middleware and extractor.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use blog_core::ports::AuthError;
use blog_shared::Envelope;

use crate::state::AppState;

/// Verified identity extractor.
///
/// Use this in handlers to require a valid bearer token. The identity is
/// trusted as-is; there is no per-post ownership check.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub email: Option<String>,
}

/// Error type for identity verification failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::MissingAuth => actix_web::http::StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken(_) | AuthError::TokenExpired => {
                actix_web::http::StatusCode::FORBIDDEN
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match &self.0 {
            AuthError::MissingAuth => "Authorization header missing",
            AuthError::InvalidToken(_) | AuthError::TokenExpired => "Invalid or expired token",
        };

        actix_web::HttpResponse::build(self.status_code()).json(Envelope::fail(message))
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AuthenticationError(AuthError::InvalidToken(
                "server configuration error".to_owned(),
            ))));
        };

        let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
            return ready(Err(AuthenticationError(AuthError::MissingAuth)));
        };

        let Ok(auth_str) = auth_header.to_str() else {
            return ready(Err(AuthenticationError(AuthError::InvalidToken(
                "invalid authorization header".to_owned(),
            ))));
        };

        let Some(token) = auth_str.strip_prefix("Bearer ") else {
            return ready(Err(AuthenticationError(AuthError::InvalidToken(
                "expected Bearer token".to_owned(),
            ))));
        };

        match state.verifier.verify(token) {
            Ok(claims) => ready(Ok(Identity {
                subject: claims.subject,
                email: claims.email,
            })),
            Err(e) => {
                tracing::warn!(error = %e, "Token verification failed");
                ready(Err(AuthenticationError(e)))
            }
        }
    }
}
