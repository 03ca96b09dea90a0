use thiserror::Error;

/// Failure reported by the gateway admin API or the transport underneath it.
/// Never retried here; the reconcile layer surfaces it with operation context.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("admin api transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("admin api returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode admin api response: {0}")]
    Decode(String),
}
