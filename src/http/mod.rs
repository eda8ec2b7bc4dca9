//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, any GET path)
//!     → serialize shared document
//!     → 200 application/octet-stream download
//! ```
//!
//! The document is immutable once serving starts, so requests share it
//! without locking.

pub mod server;

pub use server::{AppState, DocumentServer, DOWNLOAD_FILENAME};
