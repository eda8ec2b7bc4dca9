//! vmess link payload.

use serde::{Deserialize, Deserializer};

use crate::subscription::record::{Protocol, ProxyRecord};

/// Cipher assigned to every vmess proxy.
pub const VMESS_CIPHER: &str = "auto";

/// JSON object carried base64-encoded in a `vmess://` link.
///
/// Every field is optional and `null` reads as empty. Numeric fields may
/// arrive as strings or numbers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VmessPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub v: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ps: String,
    #[serde(deserialize_with = "lenient_string")]
    pub add: String,
    #[serde(deserialize_with = "lenient_string")]
    pub port: String,
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub aid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub net: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub host: String,
    #[serde(deserialize_with = "lenient_string")]
    pub path: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tls: String,
}

impl VmessPayload {
    pub fn into_record(self) -> ProxyRecord {
        ProxyRecord::new(
            self.ps,
            self.add,
            parse_or_zero(&self.port),
            Protocol::Vmess {
                uuid: self.id,
                alter_id: parse_or_zero(&self.aid),
                cipher: VMESS_CIPHER.to_string(),
                network: self.net,
            },
        )
    }
}

/// Parse an integer field, yielding zero for anything unparseable,
/// including surrounding whitespace.
pub fn parse_or_zero<T>(raw: &str) -> T
where
    T: std::str::FromStr + Default,
{
    raw.parse().unwrap_or_default()
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}
