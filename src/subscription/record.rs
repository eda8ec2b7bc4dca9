//! Normalized proxy records and their sparse field-map projection.

use serde_yaml::{Mapping, Value};

/// Sparse key/value projection of a proxy, keyed by output document field name.
///
/// Insertion-ordered, so serialized entries keep a stable field order.
pub type FieldMap = Mapping;

/// Protocol-specific settings of a proxy record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protocol {
    Vmess {
        uuid: String,
        alter_id: u32,
        cipher: String,
        network: String,
    },
    Shadowsocks {
        cipher: String,
        password: String,
    },
    Trojan {
        password: String,
        sni: String,
    },
}

impl Protocol {
    /// Protocol tag used for the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Protocol::Vmess { .. } => "vmess",
            Protocol::Shadowsocks { .. } => "ss",
            Protocol::Trojan { .. } => "trojan",
        }
    }
}

/// A proxy endpoint decoded from a subscription link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRecord {
    /// Display label. May be empty before normalization.
    pub name: String,
    pub server: String,
    /// Zero when the source port did not parse.
    pub port: u16,
    pub protocol: Protocol,
}

impl ProxyRecord {
    pub fn new(name: impl Into<String>, server: impl Into<String>, port: u16, protocol: Protocol) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
            port,
            protocol,
        }
    }

    /// Project the record onto the output document's proxy schema.
    ///
    /// The name is trimmed and `udp` is always emitted as `true`. Empty strings and zero
    /// integers are left out of the map entirely.
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        put_str(&mut map, "name", self.name.trim());
        put_str(&mut map, "type", self.protocol.kind());
        put_str(&mut map, "server", &self.server);
        put_int(&mut map, "port", u64::from(self.port));

        match &self.protocol {
            Protocol::Vmess { uuid, alter_id, cipher, network } => {
                put_str(&mut map, "uuid", uuid);
                put_int(&mut map, "alterId", u64::from(*alter_id));
                put_str(&mut map, "cipher", cipher);
                put_str(&mut map, "network", network);
            }
            Protocol::Shadowsocks { cipher, password } => {
                put_str(&mut map, "cipher", cipher);
                put_str(&mut map, "password", password);
            }
            Protocol::Trojan { password, sni } => {
                put_str(&mut map, "password", password);
                put_str(&mut map, "sni", sni);
            }
        }

        put_bool(&mut map, "udp", true);
        map
    }
}

fn put_str(map: &mut FieldMap, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(Value::from(key), Value::from(value));
    }
}

fn put_int(map: &mut FieldMap, key: &str, value: u64) {
    if value != 0 {
        map.insert(Value::from(key), Value::from(value));
    }
}

fn put_bool(map: &mut FieldMap, key: &str, value: bool) {
    if value {
        map.insert(Value::from(key), Value::from(value));
    }
}
