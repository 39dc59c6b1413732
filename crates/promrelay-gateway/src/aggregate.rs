//! Read path: merge every stored metric file into one synthetic `__all__`
//! file.
//!
//! Whole-or-nothing by design: a single object that fails to fetch, decode,
//! or validate aborts the entire aggregation, because the single-document
//! exposition response has no way to signal a partial result. Fetches run
//! with bounded concurrency; the result order is always the listing order,
//! and the first error (in that order) wins.

use futures_util::{stream, StreamExt, TryStreamExt};

use promrelay_core::error::{MetricsError, Result};
use promrelay_core::MetricFile;

use crate::store::ObjectStore;

const FETCH_CONCURRENCY: usize = 8;

/// List the bucket and aggregate everything in it.
pub async fn aggregate_all(store: &dyn ObjectStore) -> Result<MetricFile> {
    let keys = store.list().await?;
    aggregate(store, keys).await
}

/// Aggregate the given object identifiers, in the order supplied.
pub async fn aggregate(store: &dyn ObjectStore, keys: Vec<String>) -> Result<MetricFile> {
    let files: Vec<MetricFile> = stream::iter(keys)
        .map(|key| fetch_file(store, key))
        .buffered(FETCH_CONCURRENCY)
        .try_collect()
        .await?;

    let mut all = MetricFile::aggregate_root();
    for f in files {
        all.absorb(f);
    }
    Ok(all)
}

/// Fetch, decode, and validate one stored object. The validation error names
/// the offending key; fetch and decode errors surface as-is.
async fn fetch_file(store: &dyn ObjectStore, key: String) -> Result<MetricFile> {
    let raw = store.get(&key).await?;
    let mf = MetricFile::decode(&raw)?;
    if !mf.validate() {
        return Err(MetricsError::Validation(format!(
            "stored object failed validation: {key}"
        )));
    }
    Ok(mf)
}
