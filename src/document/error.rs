//! Document building errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::subscription::DecodeError;

/// Errors raised while ingesting sources into the aggregation document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Local source or template file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source or template is not a valid document.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A proxy entry carries no string `name`.
    #[error("proxy #{index} has no name")]
    MissingName { index: usize },

    /// The conversion backend address is not a valid URL.
    #[error("invalid conversion backend {backend:?}: {source}")]
    InvalidBackend {
        backend: String,
        #[source]
        source: url::ParseError,
    },

    /// Request to the conversion backend failed.
    #[error("conversion backend request failed: {0}")]
    Converter(#[from] reqwest::Error),

    /// Local subscription decoding failed.
    #[error(transparent)]
    Subscription(#[from] DecodeError),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
