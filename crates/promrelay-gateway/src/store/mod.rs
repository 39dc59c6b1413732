//! Object-store collaborator: list/get/put by key under one logical bucket.
//!
//! Overwrite-on-put, no versioning. `list()` returns keys in a deterministic
//! order so aggregation output is reproducible across reads of the same
//! bucket state.

pub mod fs;
pub mod memory;

use async_trait::async_trait;
use bytes::Bytes;

use promrelay_core::error::Result;

pub use fs::FsStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// All keys in the bucket, deterministically ordered.
    async fn list(&self) -> Result<Vec<String>>;

    /// Raw bytes for one key.
    async fn get(&self, key: &str) -> Result<Bytes>;

    /// Write (or silently overwrite) one key.
    async fn put(&self, key: &str, body: Bytes) -> Result<()>;
}
