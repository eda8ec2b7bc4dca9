//! Output document schema.
//!
//! Mirrors the subset of the proxy-client configuration format this tool
//! produces. Keys it does not model are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::subscription::FieldMap;

/// The aggregation document written to disk or served over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClashDocument {
    pub port: u16,
    pub socks_port: u16,
    pub redir_port: u16,
    pub mode: String,
    pub external_controller: String,
    pub allow_lan: bool,

    /// Proxy entries in ingestion order.
    pub proxies: Vec<FieldMap>,

    pub proxy_groups: Vec<ProxyGroup>,
    pub rule_providers: Mapping,
    pub rules: Vec<String>,

    /// Template keys not modelled above.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl ClashDocument {
    pub fn from_yaml(data: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(data)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// A proxy group referencing proxies by name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProxyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub proxies: Vec<String>,
}

/// The `{proxies: [...]}` shape shared by local files and the conversion backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyList {
    #[serde(default)]
    pub proxies: Vec<FieldMap>,
}
