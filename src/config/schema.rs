//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config files.
//! Command-line flags are layered on top (see `Cli::apply`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where proxies come from.
    pub sources: SourcesConfig,

    /// Where the finished document goes.
    pub output: OutputConfig,

    /// Optional third-party conversion backend.
    pub converter: ConverterConfig,

    /// Template and proxy group settings.
    pub document: DocumentConfig,

    /// Subscription download settings.
    pub fetch: FetchConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Proxy sources, processed in order: files first, then subscriptions.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SourcesConfig {
    /// Local documents with a `proxies` list.
    pub files: Vec<PathBuf>,

    /// Subscription URLs.
    pub urls: Vec<String>,
}

/// Output sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File written when not serving over HTTP.
    pub path: PathBuf,

    /// Serve the document over HTTP on this port instead (0 = write file).
    pub port: u16,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("template.yml"),
            port: 0,
        }
    }
}

/// Conversion backend. When set, subscriptions are converted remotely.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConverterConfig {
    /// Backend base URL (e.g., "http://127.0.0.1:25500").
    pub backend: Option<String>,
}

/// Document template and proxy group.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Template file replacing the built-in one.
    pub template: Option<PathBuf>,

    /// Name of the proxy group listing every proxy.
    pub group_name: String,

    /// Type of that proxy group.
    pub group_type: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            template: None,
            group_name: "PROXY".to_string(),
            group_type: "select".to_string(),
        }
    }
}

/// Subscription download settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with subscription and backend requests.
    pub user_agent: String,

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY`/`ALL_PROXY` and connect directly.
    pub no_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("clash-merge/", env!("CARGO_PKG_VERSION")).to_string(),
            no_proxy: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
