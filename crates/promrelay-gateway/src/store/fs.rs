//! Filesystem object store: one file per key under a configured root.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

use promrelay_core::error::{MetricsError, Result};

use crate::store::ObjectStore;

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a key to a path under the root. File names may legally contain
    /// `/`, but this backend cannot host such keys without opening a path
    /// traversal hole, so they are refused outright.
    fn object_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(MetricsError::Store(format!(
                "key not usable on the fs backend: {key}"
            )));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn list(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            // An absent root is an empty bucket, not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(keys),
            Err(e) => return Err(MetricsError::Store(format!("list failed: {e}"))),
        };
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| MetricsError::Store(format!("list failed: {e}")))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => keys.push(name),
                Err(raw) => {
                    tracing::warn!(name = %Path::new(&raw).display(), "skipping non-utf8 object name");
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Bytes> {
        let path = self.object_path(key)?;
        let raw = tokio::fs::read(&path)
            .await
            .map_err(|e| MetricsError::Store(format!("get {key} failed: {e}")))?;
        Ok(Bytes::from(raw))
    }

    async fn put(&self, key: &str, body: Bytes) -> Result<()> {
        let path = self.object_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MetricsError::Store(format!("put {key} failed: {e}")))?;
        tokio::fs::write(&path, &body)
            .await
            .map_err(|e| MetricsError::Store(format!("put {key} failed: {e}")))
    }
}
