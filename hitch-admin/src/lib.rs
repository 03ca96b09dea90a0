pub mod api;
pub mod error;
pub mod http;

pub use api::{Plugin, PluginRequest, PluginsAdmin, ScopedConfig, ScopedConfigAdmin};
pub use error::RemoteError;
pub use http::AdminHttpClient;
