//! Gateway config loader (strict parsing) and reloadable snapshot handle.
//!
//! There is no process-global config: `ConfigHandle` owns the file path and
//! the current validated snapshot, `reload()` is an explicit operation, and a
//! scheduled task under the service's control drives it. Handlers only ever
//! see read-only snapshots.

pub mod schema;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;

use promrelay_core::error::{MetricsError, Result};

pub use schema::{GatewayConfig, StoreBackend};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricsError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::Validation(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Owner of the current config snapshot.
pub struct ConfigHandle {
    path: PathBuf,
    current: ArcSwap<GatewayConfig>,
}

impl ConfigHandle {
    /// Load and validate the file once at startup.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cfg = load_from_file(&path.to_string_lossy())?;
        Ok(Self {
            path,
            current: ArcSwap::from_pointee(cfg),
        })
    }

    /// Current snapshot. Cheap; callers hold the Arc for the request.
    pub fn snapshot(&self) -> Arc<GatewayConfig> {
        self.current.load_full()
    }

    /// Re-read and validate the file, then swap the snapshot. On error the
    /// previous snapshot stays in place.
    pub fn reload(&self) -> Result<()> {
        let cfg = load_from_file(&self.path.to_string_lossy())?;
        self.current.store(Arc::new(cfg));
        tracing::info!(path = %self.path.display(), "config reloaded");
        Ok(())
    }
}

/// Spawn the scheduled reload task. A reload failure logs and keeps the
/// previous snapshot; it never takes the service down. The cadence is read
/// from the current snapshot each cycle, so a reloaded `interval_secs` takes
/// effect on the next tick; 0 stops the task.
pub fn spawn_autoreload(handle: Arc<ConfigHandle>) {
    if handle.snapshot().reload.interval_secs == 0 {
        tracing::info!("config autoreload disabled");
        return;
    }
    tokio::spawn(async move {
        loop {
            let interval_secs = handle.snapshot().reload.interval_secs;
            if interval_secs == 0 {
                tracing::info!("config autoreload disabled");
                return;
            }
            tokio::time::sleep(Duration::from_secs(interval_secs)).await;
            if let Err(e) = handle.reload() {
                tracing::warn!(error = %e, "config reload failed; keeping previous snapshot");
            }
        }
    });
}
