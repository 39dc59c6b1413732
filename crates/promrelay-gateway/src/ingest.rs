//! Ingest path: decode a submission, validate it, store it verbatim under
//! its own name.
//!
//! Validation happens strictly before the store call, so nothing is ever
//! partially stored for an invalid submission. Writing an existing key
//! replaces it silently.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;

use promrelay_core::error::{MetricsError, Result};
use promrelay_core::MetricFile;

use crate::store::ObjectStore;

/// Transport decode boundary. The surrounding transport may deliver the body
/// base64-encoded; the core only ever sees decoded bytes.
pub fn decode_submission(body: &[u8], base64_encoded: bool) -> Result<Vec<u8>> {
    if !base64_encoded {
        return Ok(body.to_vec());
    }
    let text = std::str::from_utf8(body)
        .map_err(|e| MetricsError::Decode(format!("submission is not utf-8: {e}")))?;
    BASE64
        .decode(text.trim())
        .map_err(|e| MetricsError::Decode(format!("invalid base64 body: {e}")))
}

/// Decode, validate, re-encode canonically, and store one metric file.
/// Returns the storage key (the file's own name).
pub async fn ingest(store: &dyn ObjectStore, body: &[u8]) -> Result<String> {
    let mf = MetricFile::decode(body)?;

    if !mf.validate() {
        return Err(MetricsError::Validation("metric file failed validation".into()));
    }

    let canonical = mf.encode()?;
    store.put(&mf.name, Bytes::from(canonical)).await?;

    tracing::info!(file = %mf.name, metrics = mf.metrics.len(), "metric file stored");
    Ok(mf.name)
}
