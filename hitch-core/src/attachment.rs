use crate::config_input::DeclaredConfig;
use serde::{Deserialize, Serialize};

/// Desired state for a plugin attachment: a plugin name plus any subset of
/// scope refs (none set = global). The remote model permits any combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(flatten)]
    pub config: DeclaredConfig,
}

/// Observed state of a plugin attachment after a remote read.
///
/// `config_json` is always the canonical blob with computed fields stripped,
/// regardless of which input shape the user declared — that is what keeps
/// re-reads diffable against the declared value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentState {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    pub config_json: String,
}

/// Desired state for a per-consumer plugin config. Every field forces
/// recreation; this kind has no in-place update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopedConfigSpec {
    pub consumer_id: String,
    pub plugin_name: String,

    #[serde(flatten)]
    pub config: DeclaredConfig,
}

/// Observed state of a per-consumer plugin config. `id` is the composite
/// `consumer_id|plugin_name|remote_id` identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopedConfigState {
    pub id: String,
    pub consumer_id: String,
    pub plugin_name: String,
    pub config_json: String,
}
