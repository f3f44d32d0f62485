//! kvdesk-core - backend access and action dispatch for the console

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http_client;
pub mod memory;

pub use api::ConsoleApi;
pub use config::{ConfigError, ConsoleConfig};
pub use dispatch::{messages, ConsoleHost, Dispatcher};
pub use error::ApiError;
pub use http_client::HttpApi;
pub use memory::MemoryBackend;
