use crate::error::HitchError;
use serde_json::{Map, Value};

/// Parse a config blob, requiring a JSON object at the top level.
///
/// Arrays, scalars and malformed text are all `InvalidConfig` — the gateway
/// stores plugin config as a key/value document, nothing else.
pub fn parse_object(blob: &str) -> Result<Map<String, Value>, HitchError> {
    let value: Value =
        serde_json::from_str(blob).map_err(|e| HitchError::InvalidConfig(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(HitchError::InvalidConfig(format!(
            "expected a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Check that `blob` is a well-formed config document without keeping the result.
pub fn validate(blob: &str) -> Result<(), HitchError> {
    parse_object(blob).map(|_| ())
}

/// Re-serialize `blob` into canonical form: sorted keys, no insignificant
/// whitespace. Semantically identical input always yields byte-identical
/// output, which is what makes stored config diffable.
pub fn canonicalize(blob: &str) -> Result<String, HitchError> {
    Ok(to_canonical(parse_object(blob)?))
}

/// Canonical serialization of an already-parsed config object.
///
/// `serde_json::Map` is BTreeMap-backed (we do not enable `preserve_order`),
/// so iteration is key-sorted and the compact form is deterministic.
pub fn to_canonical(map: Map<String, Value>) -> String {
    Value::Object(map).to_string()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_object() {
        assert!(validate(r#"{"minute":10}"#).is_ok());
        assert!(validate("{}").is_ok());
    }

    #[test]
    fn validate_rejects_non_objects() {
        assert!(matches!(validate("[1,2]"), Err(HitchError::InvalidConfig(_))));
        assert!(matches!(validate("42"), Err(HitchError::InvalidConfig(_))));
        assert!(matches!(validate("\"x\""), Err(HitchError::InvalidConfig(_))));
        assert!(matches!(validate("null"), Err(HitchError::InvalidConfig(_))));
        assert!(matches!(validate("not json {{"), Err(HitchError::InvalidConfig(_))));
    }

    #[test]
    fn canonicalize_sorts_keys_and_strips_whitespace() {
        let canon = canonicalize("{ \"b\": 2, \"a\": 1 }").unwrap();
        assert_eq!(canon, r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let once = canonicalize(r#"{"z":{"y":[3,2,1],"x":true},"a":"s"}"#).unwrap();
        let twice = canonicalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn canonicalize_roundtrips_semantics() {
        let canon = canonicalize(r#"{"a":1,"b":2}"#).unwrap();
        let back: Value = serde_json::from_str(&canon).unwrap();
        assert_eq!(back["a"], 1);
        assert_eq!(back["b"], 2);
    }

    #[test]
    fn canonicalize_rejects_malformed() {
        assert!(matches!(
            canonicalize("{broken"),
            Err(HitchError::InvalidConfig(_))
        ));
    }
}
