use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use ipnet::IpNet;

use crate::state::SharedState;

/// Client address as recorded in the activity log.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl FromRequestParts<SharedState> for ClientIp {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(ClientIp(select_ip(
            &parts.headers,
            peer,
            &state.config.trusted_proxies,
        )))
    }
}

fn select_ip(headers: &HeaderMap, peer_addr: Option<IpAddr>, trusted_proxies: &[IpNet]) -> String {
    let peer = peer_addr.unwrap_or(IpAddr::from([127, 0, 0, 1]));

    // Only trust X-Forwarded-For if the direct connection is from a trusted proxy
    if !trusted_proxies.is_empty() && trusted_proxies.iter().any(|net| net.contains(&peer)) {
        if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            // Take the first (leftmost) IP that isn't a trusted proxy
            for ip_str in xff.split(',').map(|s| s.trim()) {
                if let Ok(ip) = ip_str.parse::<IpAddr>() {
                    if !trusted_proxies.iter().any(|net| net.contains(&ip)) {
                        return ip.to_string();
                    }
                }
            }
        }
    }

    peer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxies(cidrs: &[&str]) -> Vec<IpNet> {
        cidrs.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn ignores_forwarded_header_from_untrusted_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9".parse().unwrap());

        let ip = select_ip(
            &headers,
            Some("198.51.100.4".parse().unwrap()),
            &proxies(&["10.0.0.0/8"]),
        );
        assert_eq!(ip, "198.51.100.4");
    }

    #[test]
    fn takes_leftmost_non_proxy_from_trusted_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.9, 10.0.0.2, 10.0.0.1".parse().unwrap(),
        );

        let ip = select_ip(
            &headers,
            Some("10.0.0.1".parse().unwrap()),
            &proxies(&["10.0.0.0/8"]),
        );
        assert_eq!(ip, "203.0.113.9");
    }

    #[test]
    fn falls_back_to_peer_without_proxies() {
        let headers = HeaderMap::new();
        let ip = select_ip(&headers, Some("198.51.100.4".parse().unwrap()), &[]);
        assert_eq!(ip, "198.51.100.4");
    }
}
