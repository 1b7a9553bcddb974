//! Outbound HTTP client construction.
//!
//! # Design Decisions
//! - One `reqwest::Client` per remote service, reused for every call
//! - Loopback endpoints (local nodes, local sponsor) bypass system proxies

use std::time::Duration;

/// Whether `url` points at this machine.
pub fn is_loopback(url: &url::Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

/// Build a client for `endpoints`, with an optional overall request timeout.
pub fn http_client(
    endpoints: &[url::Url],
    timeout: Option<Duration>,
) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    if !endpoints.is_empty() && endpoints.iter().all(is_loopback) {
        builder = builder.no_proxy();
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_detection() {
        let local: url::Url = "http://127.0.0.1:9000".parse().unwrap();
        let named: url::Url = "http://LOCALHOST:3000/api".parse().unwrap();
        let remote: url::Url = "https://fullnode.testnet.sui.io:443".parse().unwrap();
        assert!(is_loopback(&local));
        assert!(is_loopback(&named));
        assert!(!is_loopback(&remote));
    }
}
