//! Proxy subscription aggregation library.

pub mod cli;
pub mod config;
pub mod document;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod subscription;

pub use config::AppConfig;
pub use document::{ClashDocument, DocumentBuilder};
pub use http::DocumentServer;
pub use lifecycle::Shutdown;
pub use subscription::{decode_line, ProxyRecord};
