//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! PostgreSQL persistence via SeaORM, JWT identity verification, and an
//! in-memory blob store standing in for the external asset service.

pub mod auth;
pub mod blob;
pub mod database;

pub use auth::JwtTokenVerifier;
pub use blob::InMemoryBlobStore;
pub use database::{DatabaseConfig, PostgresPostRepository, connect, ensure_schema};
