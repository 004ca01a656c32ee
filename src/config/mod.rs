//! Client configuration: where the API lives and how patiently to call it.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::ClientConfig;
