//! Blob storage implementations.

mod memory;

pub use memory::InMemoryBlobStore;
