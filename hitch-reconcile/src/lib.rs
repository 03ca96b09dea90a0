pub mod error;
pub mod plugin;
pub mod scoped;

pub use error::ReconcileError;
