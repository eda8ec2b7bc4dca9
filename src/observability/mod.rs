//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → structured log events (tracing macros)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so stdout stays free for document output
//! - Per-source counts are logged at info, per-line skips at debug

pub mod logging;

pub use logging::init_logging;
