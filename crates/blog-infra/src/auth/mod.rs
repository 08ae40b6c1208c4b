//! Identity verification against the external token issuer.

mod jwt;

pub use jwt::JwtTokenVerifier;
