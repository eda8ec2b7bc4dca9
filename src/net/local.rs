//! Local address discovery.

use std::net::{IpAddr, UdpSocket};

/// Address used only to pick the outbound interface. Nothing is sent.
const ROUTE_TARGET: &str = "8.8.8.8:53";

/// The address other machines on the network can reach this host at.
///
/// Falls back to `localhost` when no route is available.
pub fn local_ip() -> String {
    discover_local_ip()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "localhost".to_string())
}

fn discover_local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(ROUTE_TARGET).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

/// URL clients subscribe to when the document is served on `port`.
pub fn subscribe_url(port: u16) -> String {
    format!("http://{}:{}", local_ip(), port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ip_is_usable() {
        let ip = local_ip();
        assert!(ip == "localhost" || ip.parse::<IpAddr>().is_ok());
    }

    #[test]
    fn test_subscribe_url() {
        let url = subscribe_url(8080);
        assert!(url.starts_with("http://"));
        assert!(url.ends_with(":8080"));
    }
}
