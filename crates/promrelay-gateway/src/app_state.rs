//! Shared application state for the promrelay gateway.

use std::sync::Arc;

use promrelay_core::error::{MetricsError, Result};

use crate::config::{ConfigHandle, GatewayConfig, StoreBackend};
use crate::store::{FsStore, MemoryStore, ObjectStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: Arc<ConfigHandle>,
    store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: Arc<ConfigHandle>) -> Result<Self> {
        let snapshot = cfg.snapshot();
        let store = build_store(&snapshot)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        })
    }

    /// Current config snapshot; follows reloads.
    pub fn config(&self) -> Arc<GatewayConfig> {
        self.inner.cfg.snapshot()
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.inner.store.as_ref()
    }
}

/// The backend is fixed at startup: scalar settings (auth token) take effect
/// on reload, but switching backend or root requires a restart.
fn build_store(cfg: &GatewayConfig) -> Result<Arc<dyn ObjectStore>> {
    match cfg.store.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Fs => {
            let root = cfg
                .store
                .root
                .as_deref()
                .ok_or_else(|| MetricsError::Internal("fs store requires store.root".into()))?;
            Ok(Arc::new(FsStore::new(root)))
        }
    }
}
