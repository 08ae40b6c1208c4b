use thiserror::Error;

/// Errors from identity verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingAuth,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,
}

/// The verified identity attached to a request.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: String,
    pub email: Option<String>,
}

/// Verifies a bearer credential issued by the external identity provider.
///
/// Token issuance is out of scope; the core only ever checks tokens.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}
