//! promrelay core: the metric data model, validation, codec, and exposition
//! rendering shared by the gateway and tooling.
//!
//! This crate defines what a metric submission *is* and the error surface for
//! everything that can go wrong with one. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MetricsError`/`Result` so the gateway
//! process does not crash on malformed submissions or corrupt stored objects.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{MetricsError, Result};
pub use model::{Metric, MetricFile, AGGREGATE_FILE_NAME};
