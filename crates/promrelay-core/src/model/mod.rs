//! Metric data model (single metric + metric file).
//!
//! Both types are plain serde documents: decoding never validates, and every
//! decode is followed by an explicit `validate()` call at the boundary that
//! performed it (ingest and read alike). Values are immutable once built and
//! discarded after rendering or storage.

pub mod file;
pub mod metric;

pub use file::{MetricFile, AGGREGATE_FILE_NAME};
pub use metric::Metric;
