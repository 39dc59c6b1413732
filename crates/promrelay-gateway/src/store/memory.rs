//! In-memory object store, the default backend for tests and local runs.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use promrelay_core::error::{MetricsError, Result};

use crate::store::ObjectStore;

#[derive(Default)]
pub struct MemoryStore {
    objects: DashMap<String, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.objects.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Bytes> {
        self.objects
            .get(key)
            .map(|e| e.value().clone())
            .ok_or_else(|| MetricsError::Store(format!("no such object: {key}")))
    }

    async fn put(&self, key: &str, body: Bytes) -> Result<()> {
        self.objects.insert(key.to_string(), body);
        Ok(())
    }
}
