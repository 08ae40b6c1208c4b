use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};

use blog_core::ports::{AuthError, TokenClaims, TokenVerifier};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    exp: i64,
}

/// Verifies HS256 bearer tokens issued by the identity provider.
///
/// This service never issues tokens; it only checks them.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(TokenClaims {
            subject: data.claims.sub,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(secret: &str, exp: i64) -> String {
        let claims = Claims {
            sub: "user-1".to_owned(),
            email: Some("jane@example.com".to_owned()),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_claims() {
        let verifier = JwtTokenVerifier::new("s3cret");
        let exp = chrono::Utc::now().timestamp() + 3600;

        let claims = verifier.verify(&token("s3cret", exp)).unwrap();
        assert_eq!(claims.subject, "user-1");
        assert_eq!(claims.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn expired_token_is_distinguished() {
        let verifier = JwtTokenVerifier::new("s3cret");
        let exp = chrono::Utc::now().timestamp() - 3600;

        let err = verifier.verify(&token("s3cret", exp)).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let verifier = JwtTokenVerifier::new("s3cret");
        let exp = chrono::Utc::now().timestamp() + 3600;

        let err = verifier.verify(&token("other", exp)).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
