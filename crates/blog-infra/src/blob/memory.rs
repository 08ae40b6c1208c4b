use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use blog_core::ports::{BlobError, BlobStore};

/// In-memory blob store - a stand-in for the external asset service.
///
/// Buffers live for the lifetime of the process only.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, (String, Vec<u8>)>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored blob back by its reference.
    pub fn get(&self, reference: &str) -> Option<(String, Vec<u8>)> {
        self.blobs
            .read()
            .ok()
            .and_then(|blobs| blobs.get(reference).cloned())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, content_type: &str, bytes: Vec<u8>) -> Result<String, BlobError> {
        let reference = format!("mem://{}", Uuid::new_v4());
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| BlobError::Store("store lock poisoned".to_owned()))?;
        blobs.insert(reference.clone(), (content_type.to_owned(), bytes));
        tracing::debug!(%reference, "Stored blob");
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_returns_a_resolvable_reference() {
        let store = InMemoryBlobStore::new();
        let reference = store
            .put("image/png", vec![0x89, 0x50, 0x4e, 0x47])
            .await
            .unwrap();

        let (content_type, bytes) = store.get(&reference).unwrap();
        assert_eq!(content_type, "image/png");
        assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
    }
}
