//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Load template → Ingest sources in order → Sink
//!
//! Sink:
//!     port == 0 → write file → exit
//!     port != 0 → bind → serve until shutdown
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C → broadcast → server drains → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any error before the sink aborts the run, nothing is written
//! - Sources are ingested sequentially, never concurrently
//! - No retries anywhere

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{build_document, run, write_document, AppError};
