use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Blob store failed: {0}")]
    Store(String),
}

/// Opaque sink for post-associated binary assets.
///
/// The contract is deliberately narrow: accept a buffer, return a
/// reference. Upload validation (MIME type, size) happens before a buffer
/// ever reaches this port.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, content_type: &str, bytes: Vec<u8>) -> Result<String, BlobError>;
}
