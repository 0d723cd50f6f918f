//! Mock ObjectStore implementation for testing

use async_trait::async_trait;
use medio_core::AccessLevel;
use medio_storage::{ObjectStore, StorageError, StorageResult};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Operation kind recorded by [`MockStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Put,
    Delete,
}

/// One recorded store call, in issue order.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub op: StoreOp,
    pub key: String,
    /// Set for puts only.
    pub acl: Option<AccessLevel>,
}

/// In-memory store that records every call and can inject failures per key.
pub struct MockStore {
    base_url: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail_puts: Mutex<HashSet<String>>,
    fail_deletes: Mutex<HashSet<String>>,
}

impl MockStore {
    pub fn new(base_url: &str) -> Self {
        MockStore {
            base_url: base_url.trim_end_matches('/').to_string(),
            objects: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            fail_puts: Mutex::new(HashSet::new()),
            fail_deletes: Mutex::new(HashSet::new()),
        }
    }

    /// Make the next puts of `key` fail.
    pub fn fail_put_on(&self, key: &str) {
        self.fail_puts.lock().unwrap().insert(key.to_string());
    }

    /// Make the next deletes of `key` fail.
    pub fn fail_delete_on(&self, key: &str) {
        self.fail_deletes.lock().unwrap().insert(key.to_string());
    }

    pub fn has_object(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn put_keys(&self) -> Vec<String> {
        self.keys_for(StoreOp::Put)
    }

    pub fn delete_keys(&self) -> Vec<String> {
        self.keys_for(StoreOp::Delete)
    }

    fn keys_for(&self, op: StoreOp) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.op == op)
            .map(|call| call.key.clone())
            .collect()
    }

    fn record(&self, op: StoreOp, key: &str, acl: Option<AccessLevel>) {
        self.calls.lock().unwrap().push(RecordedCall {
            op,
            key: key.to_string(),
            acl,
        });
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new("https://example.com")
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: &str,
        acl: AccessLevel,
    ) -> StorageResult<String> {
        self.record(StoreOp::Put, key, Some(acl));
        if self.fail_puts.lock().unwrap().contains(key) {
            return Err(StorageError::UploadFailed(format!("injected failure: {key}")));
        }
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(format!("{}/{}", self.base_url, key))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.record(StoreOp::Delete, key, None);
        if self.fail_deletes.lock().unwrap().contains(key) {
            return Err(StorageError::DeleteFailed(format!("injected failure: {key}")));
        }
        // Deleting a non-existent key is not an error, matching S3 semantics.
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}
