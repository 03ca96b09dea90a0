use crate::error::HitchError;

const SEPARATOR: char = '|';

/// Composite local identifier for the scoped attachment.
///
/// The remote API addresses a scoped config by the (consumer, plugin name,
/// remote id) triple, not by the remote id alone, so the persisted local
/// identifier carries all three joined with `|`.
///
/// Callers must not put `|` inside any component; the codec does not escape,
/// so encode/parse would stop being inverses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedConfigId {
    pub consumer_id: String,
    pub plugin_name: String,
    pub config_id: String,
}

impl ScopedConfigId {
    pub fn new(
        consumer_id: impl Into<String>,
        plugin_name: impl Into<String>,
        config_id: impl Into<String>,
    ) -> Self {
        Self {
            consumer_id: consumer_id.into(),
            plugin_name: plugin_name.into(),
            config_id: config_id.into(),
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.consumer_id, self.plugin_name, self.config_id
        )
    }

    /// Split a persisted identifier back into its triple. Fails unless the
    /// split yields exactly three parts; the parts themselves are not
    /// otherwise validated.
    pub fn parse(id: &str) -> Result<Self, HitchError> {
        let parts: Vec<&str> = id.split(SEPARATOR).collect();
        match parts.as_slice() {
            [consumer_id, plugin_name, config_id] => {
                Ok(Self::new(*consumer_id, *plugin_name, *config_id))
            }
            _ => Err(HitchError::MalformedIdentifier(id.to_string())),
        }
    }
}

impl std::fmt::Display for ScopedConfigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}
