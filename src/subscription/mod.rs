//! Subscription decoding subsystem.
//!
//! # Data Flow
//! ```text
//! subscription URL
//!     → fetcher.rs (HTTP GET, base64 decode, split lines)
//!     → decoder.rs (per-scheme link parsing, vmess.rs for vmess JSON)
//!     → record.rs (ProxyRecord → sparse FieldMap)
//!     → document builder
//! ```
//!
//! # Design Decisions
//! - Links with an unsupported scheme are skipped; links that are not URIs are fatal
//! - Unparseable integers (port, alterId) become zero instead of failing
//! - Zero and empty fields are omitted from the field map

pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod record;
pub mod vmess;

pub use decoder::{decode_line, decode_url};
pub use error::{DecodeError, DecodeResult};
pub use fetcher::{decode_subscription_body, SubscriptionFetcher};
pub use record::{FieldMap, Protocol, ProxyRecord};
