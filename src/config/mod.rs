//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → command-line flags layered on top
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so no config file is needed at all
//! - Flags append to list settings and override scalar ones
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AppConfig, ConverterConfig, DocumentConfig, FetchConfig, LogFormat, ObservabilityConfig,
    OutputConfig, SourcesConfig,
};
pub use validation::{validate_config, ValidationError};
