//! A named, ordered bundle of metrics: the unit of storage.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::model::metric::Metric;

/// Reserved name of the synthetic file the read path assembles from every
/// stored object. Never persisted.
pub const AGGREGATE_FILE_NAME: &str = "__all__";

/// One metric submission. The `name` doubles as the storage object key; the
/// ingest path writes each file once and never updates or deletes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricFile {
    /// File identifier / storage key.
    #[serde(default)]
    pub name: String,
    /// Member metrics in submission order.
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl MetricFile {
    /// Empty synthetic file the aggregator fills in.
    pub fn aggregate_root() -> Self {
        Self {
            name: AGGREGATE_FILE_NAME.to_string(),
            metrics: Vec::new(),
        }
    }

    /// Pure validity check: non-empty name and every member valid. An empty
    /// metric list with a non-empty name is valid.
    pub fn validate(&self) -> bool {
        if self.name.is_empty() {
            return false;
        }
        self.metrics.iter().all(Metric::validate)
    }

    /// Concatenate member renderings in sequence order; empty text for an
    /// empty list.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for m in &self.metrics {
            m.render_into(&mut out);
        }
        out
    }

    /// Decode from JSON bytes. Missing fields default to empty values; the
    /// caller must `validate()` separately — decoding never does.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| MetricsError::Decode(format!("invalid metric file json: {e}")))
    }

    /// Canonical JSON bytes for storage. Tags re-serialize in sorted order,
    /// so encode(decode(x)) is a fixed point.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MetricsError::Internal(format!("encode failed: {e}")))
    }

    /// Append another file's metrics, preserving their order.
    pub fn absorb(&mut self, other: MetricFile) {
        self.metrics.extend(other.metrics);
    }
}
