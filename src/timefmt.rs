//! Timestamp normalization for post dates.

use crate::error::{BlogError, Result};
use chrono::DateTime;

/// Normalizes a raw post date into the value exposed as `Post.timestamp`:
/// milliseconds since the Unix epoch.
pub fn get_time(raw: &str) -> Result<f64> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).map_err(|source| {
        BlogError::InvalidTimestamp {
            raw: raw.to_string(),
            source,
        }
    })?;
    Ok(parsed.timestamp_millis() as f64)
}
