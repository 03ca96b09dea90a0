use thiserror::Error;

/// Unified error type for the config engine.
///
/// Everything here is detected before any remote call is made; transport
/// failures live in `hitch-admin`.
#[derive(Error, Debug)]
pub enum HitchError {
    #[error("invalid plugin config: {0}")]
    InvalidConfig(String),

    #[error("cannot declare both config and config_json")]
    ConflictingConfig,

    #[error("malformed identifier {0:?}: expected consumer_id|plugin_name|id")]
    MalformedIdentifier(String),
}
