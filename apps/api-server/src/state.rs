//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use blog_core::ports::{BlobStore, PostRepository, TokenVerifier};
use blog_infra::{
    InMemoryBlobStore, JwtTokenVerifier, PostgresPostRepository, connect, ensure_schema,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub blobs: Arc<dyn BlobStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Connect to storage and build the shared state.
    ///
    /// Verifies the migrated schema before accepting any request; a
    /// mismatch aborts startup instead of altering the schema at runtime.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db = connect(&config.database)
            .await
            .context("unable to connect to the database")?;
        ensure_schema(&db).await.context("schema check failed")?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(db)),
            verifier: Arc::new(JwtTokenVerifier::new(&config.jwt_secret)),
            blobs: Arc::new(InMemoryBlobStore::new()),
            max_upload_bytes: config.max_upload_bytes,
        })
    }
}
