//! Subscription download and splitting.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::subscription::decoder::decode_line;
use crate::subscription::error::{DecodeError, DecodeResult};
use crate::subscription::record::ProxyRecord;

/// Downloads subscriptions and decodes them into proxy records.
#[derive(Debug, Clone)]
pub struct SubscriptionFetcher {
    client: reqwest::Client,
}

impl SubscriptionFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Download one subscription and decode every supported link in it.
    ///
    /// Any failure aborts the whole subscription; nothing is retried.
    pub async fn fetch(&self, url: &str) -> DecodeResult<Vec<ProxyRecord>> {
        tracing::info!(url = %url, "Downloading subscription");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tracing::info!(url = %url, bytes = body.len(), "Subscription downloaded");
        decode_subscription_body(&body)
    }
}

/// Decode a subscription body: one base64 blob holding newline separated links.
///
/// Line breaks inside the blob are ignored. Blank lines and links with an
/// unsupported scheme are skipped; a line that is not a URI fails the batch.
pub fn decode_subscription_body(body: &[u8]) -> DecodeResult<Vec<ProxyRecord>> {
    let compact: Vec<u8> = body
        .iter()
        .copied()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    let raw = STANDARD.decode(&compact)?;
    let text = String::from_utf8(raw)
        .map_err(|_| DecodeError::payload("subscription body is not valid utf-8"))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    tracing::debug!(decoded = records.len(), skipped, "Subscription body decoded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(lines: &[&str]) -> Vec<u8> {
        STANDARD.encode(lines.join("\n")).into_bytes()
    }

    #[test]
    fn test_mixed_body_skips_unknown_schemes() {
        let body = encode(&[
            "trojan://pw@a.example:443?sni=a.example#first",
            "vless://uuid@b.example:443#skipped",
            "",
            "trojan://pw@c.example:443#third",
        ]);
        let records = decode_subscription_body(&body).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_invalid_line_aborts_batch() {
        let body = encode(&["trojan://pw@a.example:443#ok", "not a uri at all"]);
        let err = decode_subscription_body(&body).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUri { .. }));
    }

    #[test]
    fn test_bad_line_payload_aborts_batch() {
        let body = encode(&["trojan://pw@a.example:443#ok", "trojan://pw@nohost-port#bad"]);
        let err = decode_subscription_body(&body).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_body_not_base64() {
        let err = decode_subscription_body(b"this is not base64!").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedEncoding(_)));
    }

    #[test]
    fn test_wrapped_base64_and_crlf_lines() {
        let encoded = STANDARD.encode("trojan://pw@a.example:443#one\r\ntrojan://pw@b.example:443#two\r\n");
        let (head, tail) = encoded.split_at(20);
        let body = format!("{}\r\n{}\n", head, tail);
        let records = decode_subscription_body(body.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "two");
    }

    #[test]
    fn test_body_not_utf8() {
        let body = STANDARD.encode([b't', b'r', 0xff, 0xfe, b'\n']).into_bytes();
        let err = decode_subscription_body(&body).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_empty_body() {
        assert!(decode_subscription_body(b"").unwrap().is_empty());
    }
}
