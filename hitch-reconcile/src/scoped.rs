//! Lifecycle operations for the per-consumer plugin config.
//!
//! This kind has no in-place update: any change is destroy+recreate, driven
//! by the schema table. Its local identity is the composite
//! `consumer_id|plugin_name|remote_id` identifier, and a missing remote
//! object on read is a hard error — there is no recreate-on-missing policy
//! for this kind.

use crate::error::ReconcileError;
use hitch_admin::ScopedConfigAdmin;
use hitch_core::attachment::{ScopedConfigSpec, ScopedConfigState};
use hitch_core::config_input::ConfigInput;
use hitch_core::ident::ScopedConfigId;
use hitch_core::{drift, encode, normalize};
use tracing::info;

pub async fn create(
    admin: &dyn ScopedConfigAdmin,
    spec: &ScopedConfigSpec,
) -> Result<ScopedConfigState, ReconcileError> {
    let input = spec.config.resolve_scoped()?;
    if let ConfigInput::Blob(blob) = &input {
        normalize::validate(blob)?;
    }
    let payload = encode::encode_pairs(input);

    let created = admin
        .create_config(&spec.consumer_id, &spec.plugin_name, &payload)
        .await
        .map_err(|e| {
            ReconcileError::remote(
                format!(
                    "create scoped config for consumer {} plugin {} with payload {payload:?}",
                    spec.consumer_id, spec.plugin_name
                ),
                e,
            )
        })?;
    let id = ScopedConfigId::new(&spec.consumer_id, &spec.plugin_name, &created.id);
    info!(id = %id, "created scoped plugin config");
    read(admin, &id.encode()).await
}

pub async fn read(
    admin: &dyn ScopedConfigAdmin,
    id: &str,
) -> Result<ScopedConfigState, ReconcileError> {
    let parsed = ScopedConfigId::parse(id)?;
    let remote = admin
        .get_config(&parsed.consumer_id, &parsed.plugin_name, &parsed.config_id)
        .await
        .map_err(|e| ReconcileError::remote(format!("read scoped config {id}"), e))?;
    let Some(config) = remote else {
        return Err(ReconcileError::MissingRemote { id: id.to_string() });
    };
    Ok(ScopedConfigState {
        id: parsed.encode(),
        consumer_id: parsed.consumer_id,
        plugin_name: parsed.plugin_name,
        config_json: drift::strip_body(&config.body, drift::COMPUTED_FIELDS)?,
    })
}

pub async fn delete(admin: &dyn ScopedConfigAdmin, id: &str) -> Result<(), ReconcileError> {
    let parsed = ScopedConfigId::parse(id)?;
    admin
        .delete_config(&parsed.consumer_id, &parsed.plugin_name, &parsed.config_id)
        .await
        .map_err(|e| ReconcileError::remote(format!("delete scoped config {id}"), e))?;
    info!(id, "deleted scoped plugin config");
    Ok(())
}
