use hitch_admin::RemoteError;
use hitch_core::HitchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Engine-side validation failure; never produced after a remote call
    /// has been made.
    #[error(transparent)]
    Config(#[from] HitchError),

    /// Remote failure, wrapped with the operation (and outbound request,
    /// where one exists) for diagnostics. Not retried.
    #[error("failed to {op}: {source}")]
    Remote {
        op: String,
        #[source]
        source: RemoteError,
    },

    /// A scoped config the local identifier points at no longer exists on
    /// the gateway. Unlike the primary attachment, there is no
    /// recreate-on-missing policy for this kind, so it surfaces as an error.
    #[error("scoped plugin config {id} not found on gateway")]
    MissingRemote { id: String },
}

impl ReconcileError {
    pub(crate) fn remote(op: impl Into<String>, source: RemoteError) -> Self {
        Self::Remote {
            op: op.into(),
            source,
        }
    }
}
