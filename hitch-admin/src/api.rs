//! Wire types and the two admin client traits the reconcile layer consumes.
//!
//! The traits are the whole transport contract: tests swap in in-memory
//! implementations, production uses [`crate::AdminHttpClient`].

use crate::error::RemoteError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outbound payload for creating or replacing a plugin attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(default)]
    pub config: Map<String, Value>,
}

/// A plugin attachment as stored by the gateway. `config` is the raw stored
/// object, computed fields included — filtering is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub api_id: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub route_id: Option<String>,
    #[serde(default)]
    pub consumer_id: Option<String>,

    #[serde(default)]
    pub config: Map<String, Value>,
}

/// A per-consumer plugin config as stored by the gateway. The scoped endpoint
/// returns the stored document as a raw JSON text body rather than a typed
/// object, so `body` is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedConfig {
    pub id: String,
    pub body: String,
}

/// Admin operations on plugin attachments.
#[async_trait]
pub trait PluginsAdmin: Send + Sync {
    async fn create(&self, request: &PluginRequest) -> Result<Plugin, RemoteError>;

    async fn update_by_id(&self, id: &str, request: &PluginRequest)
    -> Result<Plugin, RemoteError>;

    /// `Ok(None)` when the gateway no longer knows the id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Plugin>, RemoteError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), RemoteError>;
}

/// Admin operations on per-consumer plugin configs. The remote addresses
/// these by the (consumer, plugin name, id) triple.
#[async_trait]
pub trait ScopedConfigAdmin: Send + Sync {
    async fn create_config(
        &self,
        consumer_id: &str,
        plugin_name: &str,
        payload: &str,
    ) -> Result<ScopedConfig, RemoteError>;

    /// `Ok(None)` when the gateway no longer knows the triple. Whether that
    /// is an error is the caller's policy, not the transport's.
    async fn get_config(
        &self,
        consumer_id: &str,
        plugin_name: &str,
        config_id: &str,
    ) -> Result<Option<ScopedConfig>, RemoteError>;

    async fn delete_config(
        &self,
        consumer_id: &str,
        plugin_name: &str,
        config_id: &str,
    ) -> Result<(), RemoteError>;
}
