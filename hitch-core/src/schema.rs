//! Declarative attribute metadata for the two attachment kinds.
//!
//! This is configuration consumed by front ends and adapters (which fields
//! are required, which force recreation, which conflict) — the engine itself
//! never reads it.

/// Metadata for one user-facing attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub required: bool,
    /// A change to this attribute cannot be applied in place; the attachment
    /// must be destroyed and recreated.
    pub force_new: bool,
    pub conflicts_with: Option<&'static str>,
}

impl AttributeSchema {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            force_new: false,
            conflicts_with: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    const fn conflicts_with(mut self, other: &'static str) -> Self {
        self.conflicts_with = Some(other);
        self
    }
}

/// Primary attachment: name is fixed at creation, scope refs and config are
/// mutable, the two config shapes exclude each other.
pub const PLUGIN_ATTACHMENT_SCHEMA: &[AttributeSchema] = &[
    AttributeSchema::new("name").required().force_new(),
    AttributeSchema::new("api_id"),
    AttributeSchema::new("service_id"),
    AttributeSchema::new("route_id"),
    AttributeSchema::new("consumer_id"),
    AttributeSchema::new("config").conflicts_with("config_json"),
    AttributeSchema::new("config_json").conflicts_with("config"),
];

/// Scoped attachment: no in-place update exists, so everything forces
/// recreation.
pub const SCOPED_CONFIG_SCHEMA: &[AttributeSchema] = &[
    AttributeSchema::new("consumer_id").required().force_new(),
    AttributeSchema::new("plugin_name").required().force_new(),
    AttributeSchema::new("config")
        .force_new()
        .conflicts_with("config_json"),
    AttributeSchema::new("config_json")
        .force_new()
        .conflicts_with("config"),
];

/// Look up one attribute's metadata by name.
pub fn attribute<'a>(schema: &'a [AttributeSchema], name: &str) -> Option<&'a AttributeSchema> {
    schema.iter().find(|attr| attr.name == name)
}

/// Whether any of the changed attributes forces destroy+recreate.
pub fn forces_recreate(schema: &[AttributeSchema], changed: &[&str]) -> bool {
    changed
        .iter()
        .any(|name| attribute(schema, name).is_some_and(|attr| attr.force_new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_name_is_immutable_but_scopes_are_not() {
        assert!(attribute(PLUGIN_ATTACHMENT_SCHEMA, "name").unwrap().force_new);
        assert!(!attribute(PLUGIN_ATTACHMENT_SCHEMA, "service_id").unwrap().force_new);
        assert!(!forces_recreate(PLUGIN_ATTACHMENT_SCHEMA, &["service_id", "route_id"]));
        assert!(forces_recreate(PLUGIN_ATTACHMENT_SCHEMA, &["service_id", "name"]));
    }

    #[test]
    fn scoped_everything_forces_recreate() {
        for attr in SCOPED_CONFIG_SCHEMA {
            assert!(attr.force_new, "{} must force recreation", attr.name);
        }
    }

    #[test]
    fn config_shapes_conflict_both_ways() {
        for schema in [PLUGIN_ATTACHMENT_SCHEMA, SCOPED_CONFIG_SCHEMA] {
            assert_eq!(
                attribute(schema, "config").unwrap().conflicts_with,
                Some("config_json")
            );
            assert_eq!(
                attribute(schema, "config_json").unwrap().conflicts_with,
                Some("config")
            );
        }
    }

    #[test]
    fn unknown_attribute_lookup_is_none() {
        assert!(attribute(PLUGIN_ATTACHMENT_SCHEMA, "nope").is_none());
    }
}
