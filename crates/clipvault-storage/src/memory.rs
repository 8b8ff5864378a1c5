//! In-memory object store, used by tests in place of S3.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use crate::traits::{ObjectStore, StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Keeps objects in a map. Presigned URLs embed bucket, key and expiry so
/// tests can assert on them.
pub struct MemoryObjectStore {
    bucket: String,
    objects: Mutex<HashMap<String, StoredObject>>,
    /// When set, `put` and `put_file` fail, simulating a backend outage.
    fail_puts: Mutex<bool>,
}

impl MemoryObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        MemoryObjectStore {
            bucket: bucket.into(),
            objects: Mutex::new(HashMap::new()),
            fail_puts: Mutex::new(false),
        }
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn set_fail_puts(&self, fail: bool) {
        *self.fail_puts.lock().unwrap() = fail;
    }

    fn insert(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()> {
        if *self.fail_puts.lock().unwrap() {
            return Err(StorageError::PutFailed("simulated outage".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                data,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()> {
        self.insert(key, content_type, data)
    }

    async fn put_file(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<()> {
        let data = tokio::fs::read(path).await?;
        self.insert(key, content_type, data)
    }

    async fn presigned_get_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://{}.example.test/{}?X-Amz-Expires={}&X-Amz-Signature=memory",
            bucket,
            key,
            expires_in.as_secs()
        ))
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
