//! Network helpers for serving mode.
//!
//! # Data Flow
//! ```text
//! output.port
//!     → listener.rs (bind on all interfaces)
//!     → local.rs (reachable address for the subscribe hint)
//!     → Hand off to HTTP layer
//! ```

pub mod listener;
pub mod local;

pub use listener::{bind, ListenerError};
pub use local::{local_ip, subscribe_url};
