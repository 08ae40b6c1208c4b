//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod blob;
mod repository;

pub use auth::{AuthError, TokenClaims, TokenVerifier};
pub use blob::{BlobError, BlobStore};
pub use repository::{DEFAULT_RECENT_LIMIT, PageMeta, PageRequest, PostRepository};
