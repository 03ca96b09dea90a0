//! Wire encoding of resolved config input, one encoder per attachment kind.

use crate::config_input::ConfigInput;
use crate::error::HitchError;
use crate::normalize;
use serde_json::{Map, Value};

/// Primary attachment encoding: a structured object embedded in the request
/// payload. A blob is parsed back into an object here (`InvalidConfig` if it
/// does not parse); no input means an empty config object.
pub fn encode_object(input: ConfigInput) -> Result<Map<String, Value>, HitchError> {
    match input {
        ConfigInput::Structured(map) => Ok(map),
        ConfigInput::Blob(blob) => normalize::parse_object(&blob),
        ConfigInput::Absent => Ok(Map::new()),
    }
}

/// Scoped attachment encoding: a single flat string.
///
/// A structured mapping becomes `key=value` pairs joined with `&`. The remote
/// admin API treats this as a flat key/value list, not a real URL-encoded
/// document, so values are inserted verbatim with no percent-encoding. A blob
/// passes through unchanged (it was validated at the schema boundary); no
/// input yields an empty payload. Exclusivity of the two shapes is enforced
/// earlier, in `DeclaredConfig::resolve_scoped`.
pub fn encode_pairs(input: ConfigInput) -> String {
    match input {
        ConfigInput::Structured(map) => map
            .iter()
            .map(|(key, value)| format!("{key}={}", pair_value(value)))
            .collect::<Vec<_>>()
            .join("&"),
        ConfigInput::Blob(blob) => blob,
        ConfigInput::Absent => String::new(),
    }
}

/// Mapping values are declared as strings; anything else degrades to its
/// JSON text rather than failing the whole encode.
fn pair_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(value: Value) -> ConfigInput {
        match value {
            Value::Object(map) => ConfigInput::Structured(map),
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn object_from_structured_passes_through() {
        let out = encode_object(structured(json!({"minute": 10}))).unwrap();
        assert_eq!(out["minute"], 10);
    }

    #[test]
    fn object_from_blob_parses() {
        let out = encode_object(ConfigInput::Blob(r#"{"minute":10}"#.to_string())).unwrap();
        assert_eq!(out["minute"], 10);
    }

    #[test]
    fn object_from_bad_blob_fails() {
        let result = encode_object(ConfigInput::Blob("[1,2]".to_string()));
        assert!(matches!(result, Err(HitchError::InvalidConfig(_))));
    }

    #[test]
    fn object_from_absent_is_empty() {
        assert!(encode_object(ConfigInput::Absent).unwrap().is_empty());
    }

    #[test]
    fn pairs_single_entry_has_no_separator() {
        assert_eq!(encode_pairs(structured(json!({"minute": "10"}))), "minute=10");
    }

    #[test]
    fn pairs_join_with_ampersand() {
        let out = encode_pairs(structured(json!({"minute": "10", "hour": "100"})));
        // Map iteration is key-sorted
        assert_eq!(out, "hour=100&minute=10");
    }

    #[test]
    fn pairs_render_non_string_values_as_json_text() {
        let out = encode_pairs(structured(json!({"minute": 10, "local": true})));
        assert_eq!(out, "local=true&minute=10");
    }

    #[test]
    fn pairs_from_blob_pass_through_unchanged() {
        let blob = r#"{"minute":10}"#.to_string();
        assert_eq!(encode_pairs(ConfigInput::Blob(blob.clone())), blob);
    }

    #[test]
    fn pairs_from_absent_are_empty() {
        assert_eq!(encode_pairs(ConfigInput::Absent), "");
    }
}
