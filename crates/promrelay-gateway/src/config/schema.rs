use serde::Deserialize;

use promrelay_core::error::{MetricsError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub auth: AuthSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub reload: ReloadSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::Validation("config version must be 1".into()));
        }
        self.auth.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Bearer secret the ingest path compares against (constant time).
    pub token: String,
}

impl AuthSection {
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(MetricsError::Validation("auth.token must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Fs,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    /// Directory holding one file per stored object; required for `fs`.
    #[serde(default)]
    pub root: Option<String>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            root: None,
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::Fs && self.root.as_deref().unwrap_or("").is_empty() {
            return Err(MetricsError::Validation(
                "store.root is required for the fs backend".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReloadSection {
    /// Config autoreload cadence; 0 disables the reload task.
    #[serde(default = "default_reload_interval")]
    pub interval_secs: u64,
}

impl Default for ReloadSection {
    fn default() -> Self {
        Self {
            interval_secs: default_reload_interval(),
        }
    }
}

fn default_backend() -> StoreBackend {
    StoreBackend::Memory
}

fn default_reload_interval() -> u64 {
    60
}
