//! Aggregation document subsystem.
//!
//! # Data Flow
//! ```text
//! template.rs (built-in or on-disk template)
//!     → builder.rs (empty proxies, single proxy group)
//!     → sources.rs (local files, conversion backend, local subscriptions)
//!     → ClashDocument (finished, immutable)
//!     → output file or HTTP server
//! ```
//!
//! # Design Decisions
//! - The builder is passed explicitly to every ingestion step
//! - Entries from files and the conversion backend are merged as-is
//! - Proxy names are trimmed and used verbatim as group members

pub mod builder;
pub mod error;
pub mod schema;
pub mod sources;
pub mod template;

pub use builder::DocumentBuilder;
pub use error::{DocumentError, DocumentResult};
pub use schema::{ClashDocument, ProxyGroup, ProxyList};
pub use sources::RemoteConverter;
pub use template::load_template;
