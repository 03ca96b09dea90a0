pub mod attachment;
pub mod config_input;
pub mod drift;
pub mod encode;
pub mod error;
pub mod ident;
pub mod normalize;
pub mod schema;

pub use attachment::{AttachmentSpec, AttachmentState, ScopedConfigSpec, ScopedConfigState};
pub use config_input::{ConfigInput, DeclaredConfig};
pub use error::HitchError;
pub use ident::ScopedConfigId;
