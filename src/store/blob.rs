//! Key-value blob storage for image data.

use std::collections::HashMap;

use tracing::debug;

use crate::store::error::StoreError;

/// A key-value store for image blobs.
///
/// This is the whole interface the detection pipeline needs from object
/// storage; an S3/MinIO-backed implementation belongs to the caller.
pub trait BlobStore {
    /// Store `bytes` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError>;

    /// Fetch the blob stored under `key`.
    ///
    /// Fails with [`StoreError::NotFound`] if the key was never stored.
    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;
}

/// In-memory blob store for tests and local pipelines.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        debug!(key, size = bytes.len(), "stored blob");
        self.objects.insert(key.to_string(), bytes);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.objects
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_round_trip() {
        let mut store = MemoryBlobStore::new();
        store.put("images/abc.jpg", vec![1, 2, 3]).unwrap();
        assert_eq!(store.get("images/abc.jpg").unwrap(), vec![1, 2, 3]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let store = MemoryBlobStore::new();
        assert!(matches!(
            store.get("images/missing.jpg"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryBlobStore::new();
        store.put("k", vec![1]).unwrap();
        store.put("k", vec![2]).unwrap();
        assert_eq!(store.get("k").unwrap(), vec![2]);
        assert_eq!(store.len(), 1);
    }
}
