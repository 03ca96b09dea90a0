//! Lifecycle operations for the primary plugin attachment.
//!
//! Every mutation reads the attachment back afterwards so the returned state
//! reflects what the gateway actually stored, not what we sent. A read that
//! finds nothing returns `Ok(None)`: the attachment is already gone and the
//! caller should clear its local identity and recreate on the next pass.

use crate::error::ReconcileError;
use hitch_admin::{PluginRequest, PluginsAdmin};
use hitch_core::attachment::{AttachmentSpec, AttachmentState};
use hitch_core::{drift, encode};
use tracing::info;

pub async fn create(
    admin: &dyn PluginsAdmin,
    spec: &AttachmentSpec,
) -> Result<Option<AttachmentState>, ReconcileError> {
    let request = build_request(spec)?;
    let created = admin
        .create(&request)
        .await
        .map_err(|e| ReconcileError::remote(format!("create plugin attachment {request:?}"), e))?;
    info!(id = %created.id, name = %created.name, "created plugin attachment");
    read(admin, &created.id).await
}

pub async fn read(
    admin: &dyn PluginsAdmin,
    id: &str,
) -> Result<Option<AttachmentState>, ReconcileError> {
    let plugin = admin
        .get_by_id(id)
        .await
        .map_err(|e| ReconcileError::remote(format!("read plugin attachment {id}"), e))?;
    Ok(plugin.map(|p| AttachmentState {
        id: p.id,
        name: p.name,
        api_id: p.api_id,
        service_id: p.service_id,
        route_id: p.route_id,
        consumer_id: p.consumer_id,
        config_json: drift::strip(&p.config, drift::COMPUTED_FIELDS),
    }))
}

/// Full replacement of the mutable fields, then read back.
pub async fn update(
    admin: &dyn PluginsAdmin,
    id: &str,
    spec: &AttachmentSpec,
) -> Result<Option<AttachmentState>, ReconcileError> {
    let request = build_request(spec)?;
    admin
        .update_by_id(id, &request)
        .await
        .map_err(|e| ReconcileError::remote(format!("update plugin attachment {id}"), e))?;
    info!(id, name = %spec.name, "updated plugin attachment");
    read(admin, id).await
}

pub async fn delete(admin: &dyn PluginsAdmin, id: &str) -> Result<(), ReconcileError> {
    admin
        .delete_by_id(id)
        .await
        .map_err(|e| ReconcileError::remote(format!("delete plugin attachment {id}"), e))?;
    info!(id, "deleted plugin attachment");
    Ok(())
}

/// Resolve the declared config (mapping wins over blob for this kind) and
/// assemble the outbound request. Invalid blobs fail here, before any remote
/// call.
fn build_request(spec: &AttachmentSpec) -> Result<PluginRequest, ReconcileError> {
    let config = encode::encode_object(spec.config.resolve_primary())?;
    Ok(PluginRequest {
        name: spec.name.clone(),
        api_id: spec.api_id.clone(),
        service_id: spec.service_id.clone(),
        route_id: spec.route_id.clone(),
        consumer_id: spec.consumer_id.clone(),
        config,
    })
}
