use crate::error::HitchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user-facing pair of config fields: a structured mapping or a raw JSON
/// blob, mutually exclusive at the schema boundary.
///
/// Front ends flatten this into their attachment specs; the engine resolves
/// it exactly once, at the encoder boundary, into a [`ConfigInput`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclaredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_json: Option<String>,
}

/// Resolved config input: exactly one of the two shapes, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigInput {
    Structured(Map<String, Value>),
    Blob(String),
    Absent,
}

impl DeclaredConfig {
    /// The structured mapping, if present and non-empty.
    fn structured(&self) -> Option<&Map<String, Value>> {
        self.config.as_ref().filter(|map| !map.is_empty())
    }

    /// The blob, if present and non-empty.
    fn blob(&self) -> Option<&str> {
        self.config_json.as_deref().filter(|blob| !blob.is_empty())
    }

    /// Resolution policy for the primary attachment: the structured mapping
    /// wins when both fields happen to be populated. Schema-level exclusivity
    /// should make that rare, but the engine resolves it deterministically
    /// rather than assuming it impossible.
    pub fn resolve_primary(&self) -> ConfigInput {
        if let Some(map) = self.structured() {
            ConfigInput::Structured(map.clone())
        } else if let Some(blob) = self.blob() {
            ConfigInput::Blob(blob.to_string())
        } else {
            ConfigInput::Absent
        }
    }

    /// Resolution policy for the scoped (per-consumer) attachment: both
    /// fields populated at once is a hard error.
    pub fn resolve_scoped(&self) -> Result<ConfigInput, HitchError> {
        match (self.structured(), self.blob()) {
            (Some(_), Some(_)) => Err(HitchError::ConflictingConfig),
            (Some(map), None) => Ok(ConfigInput::Structured(map.clone())),
            (None, Some(blob)) => Ok(ConfigInput::Blob(blob.to_string())),
            (None, None) => Ok(ConfigInput::Absent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn primary_prefers_structured_over_blob() {
        let declared = DeclaredConfig {
            config: mapping(json!({"minute": "10"})),
            config_json: Some(r#"{"x":1}"#.to_string()),
        };
        match declared.resolve_primary() {
            ConfigInput::Structured(map) => assert_eq!(map["minute"], "10"),
            other => panic!("expected structured input, got {other:?}"),
        }
    }

    #[test]
    fn primary_falls_back_to_blob() {
        let declared = DeclaredConfig {
            config: None,
            config_json: Some(r#"{"minute":10}"#.to_string()),
        };
        assert_eq!(
            declared.resolve_primary(),
            ConfigInput::Blob(r#"{"minute":10}"#.to_string())
        );
    }

    #[test]
    fn empty_mapping_and_empty_blob_count_as_absent() {
        let declared = DeclaredConfig {
            config: mapping(json!({})),
            config_json: Some(String::new()),
        };
        assert_eq!(declared.resolve_primary(), ConfigInput::Absent);
        assert_eq!(declared.resolve_scoped().unwrap(), ConfigInput::Absent);
    }

    #[test]
    fn scoped_rejects_both_populated() {
        let declared = DeclaredConfig {
            config: mapping(json!({"minute": "10"})),
            config_json: Some(r#"{"x":1}"#.to_string()),
        };
        assert!(matches!(
            declared.resolve_scoped(),
            Err(HitchError::ConflictingConfig)
        ));
    }

    #[test]
    fn scoped_accepts_either_alone() {
        let structured = DeclaredConfig {
            config: mapping(json!({"minute": "10"})),
            config_json: None,
        };
        assert!(matches!(
            structured.resolve_scoped().unwrap(),
            ConfigInput::Structured(_)
        ));

        let blob = DeclaredConfig {
            config: None,
            config_json: Some(r#"{"minute":10}"#.to_string()),
        };
        assert!(matches!(blob.resolve_scoped().unwrap(), ConfigInput::Blob(_)));
    }
}
