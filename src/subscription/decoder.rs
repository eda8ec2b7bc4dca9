//! Per-scheme decoding of subscription links.
//!
//! # Supported links
//! ```text
//! vmess://<base64 json>
//! ss://<base64 cipher:password>@host:port#name
//! trojan://password@host:port?sni=...#name
//! ```
//!
//! Decoding is pure: no network or filesystem access happens here.

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::{Host, Url};

use crate::subscription::error::{DecodeError, DecodeResult};
use crate::subscription::record::{Protocol, ProxyRecord};
use crate::subscription::vmess::VmessPayload;

/// Parse a subscription line as a URI and decode it.
///
/// A line that is not a valid URI is an error. A valid URI with an
/// unsupported scheme yields `Ok(None)`.
pub fn decode_line(line: &str) -> DecodeResult<Option<ProxyRecord>> {
    let url = Url::parse(line).map_err(|source| DecodeError::InvalidUri {
        line: line.to_string(),
        source,
    })?;
    decode_url(&url)
}

/// Decode an already parsed link according to its scheme.
pub fn decode_url(url: &Url) -> DecodeResult<Option<ProxyRecord>> {
    let record = match url.scheme() {
        "vmess" => decode_vmess(url)?,
        "ss" => decode_shadowsocks(url)?,
        "trojan" => decode_trojan(url)?,
        other => {
            tracing::debug!(scheme = %other, "Skipping link with unsupported scheme");
            return Ok(None);
        }
    };
    Ok(Some(record))
}

fn decode_vmess(url: &Url) -> DecodeResult<ProxyRecord> {
    let encoded = url
        .host_str()
        .ok_or_else(|| DecodeError::payload("vmess link carries no payload"))?;
    let raw = STANDARD.decode(encoded)?;
    let payload: VmessPayload = serde_json::from_slice(&raw)
        .map_err(|e| DecodeError::payload(format!("invalid vmess json: {}", e)))?;
    Ok(payload.into_record())
}

fn decode_shadowsocks(url: &Url) -> DecodeResult<ProxyRecord> {
    let user_info = unescape(url.username());
    let secret = STANDARD.decode(user_info.as_bytes())?;
    let secret = String::from_utf8(secret)
        .map_err(|_| DecodeError::payload("ss user info is not valid utf-8"))?;
    let (cipher, password) = secret
        .split_once(':')
        .ok_or_else(|| DecodeError::payload("ss user info has no ':' separator"))?;
    let (server, port) = endpoint(url)?;

    Ok(ProxyRecord::new(
        fragment(url),
        server,
        port,
        Protocol::Shadowsocks {
            cipher: cipher.to_string(),
            password: password.to_string(),
        },
    ))
}

fn decode_trojan(url: &Url) -> DecodeResult<ProxyRecord> {
    let (server, port) = endpoint(url)?;
    let sni = url
        .query_pairs()
        .find(|(key, _)| key == "sni")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    Ok(ProxyRecord::new(
        fragment(url),
        server,
        port,
        Protocol::Trojan {
            password: unescape(url.username()).into_owned(),
            sni,
        },
    ))
}

/// Host and port from the link authority. Both are required.
fn endpoint(url: &Url) -> DecodeResult<(String, u16)> {
    let server = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(DecodeError::payload(format!("{} link has no host", url.scheme()))),
    };
    let port = url
        .port()
        .ok_or_else(|| DecodeError::payload(format!("{} link has no port", url.scheme())))?;
    Ok((server, port))
}

fn fragment(url: &Url) -> String {
    url.fragment().map(|f| unescape(f).into_owned()).unwrap_or_default()
}

fn unescape(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
