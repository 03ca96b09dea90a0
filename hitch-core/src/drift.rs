//! Read-path drift filtering.
//!
//! The gateway injects generated fields (ids, timestamps, resolved scope
//! refs) into stored plugin config. If those leaked into the config value we
//! persist, every read would differ from what the user declared and the diff
//! would never converge. So observed config is filtered against the
//! computed-field set before it is stored — and only on the read path:
//! outbound payloads carry the user's fields verbatim.

use crate::error::HitchError;
use crate::normalize;
use serde_json::{Map, Value};

/// Field names the gateway injects into stored plugin config.
///
/// Fixed for the process lifetime; passed into [`strip`] by parameter so the
/// filter stays free of ambient state.
pub const COMPUTED_FIELDS: &[&str] = &["id", "created_at", "api_id", "consumer_id"];

/// Drop every top-level key in `excluded` from `remote`, leaving all other
/// keys (nested values untouched) intact, and return the canonical blob.
pub fn strip(remote: &Map<String, Value>, excluded: &[&str]) -> String {
    let kept: Map<String, Value> = remote
        .iter()
        .filter(|(key, _)| !excluded.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    normalize::to_canonical(kept)
}

/// Variant for endpoints that return the stored config as a raw JSON text
/// body. Parse failure is an error: an unreadable remote body means we cannot
/// tell what is actually configured.
pub fn strip_body(body: &str, excluded: &[&str]) -> Result<String, HitchError> {
    let remote = normalize::parse_object(body)?;
    Ok(strip(&remote, excluded))
}
