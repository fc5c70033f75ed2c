//! IPv4 address validation and normalization.
//!
//! Accepts private, loopback and global unicast IPv4 addresses and returns
//! them in canonical dotted-quad form. A trailing `:port` is removed before
//! parsing.

use std::net::{IpAddr, Ipv4Addr};

/// Reasons an address is rejected for placement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid IP address format: '{0}'")]
    InvalidFormat(String),

    #[error("only IPv4 addresses are supported: '{0}'")]
    UnsupportedFamily(String),

    #[error("IP address must be a valid public or private address: '{0}'")]
    NotGlobalUnicast(String),
}

impl AddressError {
    /// Stable tag for the error kind, suitable for protocol responses
    pub fn tag(&self) -> &'static str {
        match self {
            AddressError::InvalidFormat(_) => "InvalidFormat",
            AddressError::UnsupportedFamily(_) => "UnsupportedFamily",
            AddressError::NotGlobalUnicast(_) => "NotGlobalUnicast",
        }
    }
}

/// Remove everything from the first `:` onwards
pub fn strip_port(raw: &str) -> &str {
    match raw.split_once(':') {
        Some((host, _)) => host,
        None => raw,
    }
}

/// Validate an address string and return its canonical dotted-quad form.
///
/// # Examples
/// ```
/// use ipspace::placement::address::{validate_address, AddressError};
///
/// assert_eq!(validate_address("8.8.8.8:53"), Ok("8.8.8.8".to_string()));
/// assert!(matches!(validate_address("::1"), Err(AddressError::UnsupportedFamily(_))));
/// ```
pub fn validate_address(raw: &str) -> Result<String, AddressError> {
    validate_ipv4(raw).map(|ip| ip.to_string())
}

/// Validate an address string and return the parsed IPv4 address
pub fn validate_ipv4(raw: &str) -> Result<Ipv4Addr, AddressError> {
    let ip = parse_candidate(raw)?;

    let ipv4 = as_ipv4(ip).ok_or_else(|| AddressError::UnsupportedFamily(raw.to_string()))?;

    if ipv4.is_private() || ipv4.is_loopback() {
        return Ok(ipv4);
    }

    if !is_global_unicast(&ipv4) {
        return Err(AddressError::NotGlobalUnicast(raw.to_string()));
    }

    Ok(ipv4)
}

/// Parse the raw input, stripping a port suffix only when the whole
/// string is not already an IP literal. A bare IPv6 literal therefore
/// reaches the family check instead of being cut at its first separator.
fn parse_candidate(raw: &str) -> Result<IpAddr, AddressError> {
    if let Ok(ip) = raw.parse::<IpAddr>() {
        return Ok(ip);
    }

    strip_port(raw)
        .parse::<IpAddr>()
        .map_err(|_| AddressError::InvalidFormat(raw.to_string()))
}

/// IPv4 view of an address; IPv4-mapped IPv6 addresses count as IPv4
pub fn as_ipv4(ip: IpAddr) -> Option<Ipv4Addr> {
    match ip {
        IpAddr::V4(ipv4) => Some(ipv4),
        IpAddr::V6(ipv6) => ipv6.to_ipv4_mapped(),
    }
}

/// Global unicast: anything except unspecified, broadcast, loopback,
/// multicast and link-local
pub fn is_global_unicast(ip: &Ipv4Addr) -> bool {
    !(ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_loopback()
        || ip.is_multicast()
        || ip.is_link_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_private_loopback_and_public() {
        assert_eq!(validate_address("192.168.1.5"), Ok("192.168.1.5".to_string()));
        assert_eq!(validate_address("10.0.0.1"), Ok("10.0.0.1".to_string()));
        assert_eq!(validate_address("172.20.3.4"), Ok("172.20.3.4".to_string()));
        assert_eq!(validate_address("127.0.0.1"), Ok("127.0.0.1".to_string()));
        assert_eq!(validate_address("8.8.8.8"), Ok("8.8.8.8".to_string()));
    }

    #[test]
    fn test_strips_port() {
        assert_eq!(validate_address("8.8.8.8:53"), Ok("8.8.8.8".to_string()));
        assert_eq!(validate_address("192.168.1.5:8080"), Ok("192.168.1.5".to_string()));
        assert_eq!(strip_port("1.2.3.4:80:90"), "1.2.3.4");
        assert_eq!(strip_port("1.2.3.4"), "1.2.3.4");
    }

    #[test]
    fn test_rejects_non_unicast() {
        for raw in ["255.255.255.255", "0.0.0.0", "224.0.0.1", "239.1.2.3", "169.254.10.1"] {
            assert!(
                matches!(validate_address(raw), Err(AddressError::NotGlobalUnicast(_))),
                "{} should be rejected as not global unicast",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_ipv6() {
        assert_eq!(
            validate_address("::1"),
            Err(AddressError::UnsupportedFamily("::1".to_string()))
        );
        assert!(matches!(
            validate_address("2001:db8::1"),
            Err(AddressError::UnsupportedFamily(_))
        ));
    }

    #[test]
    fn test_ipv4_mapped_ipv6_is_ipv4() {
        assert_eq!(validate_address("::ffff:8.8.4.4"), Ok("8.8.4.4".to_string()));
    }

    #[test]
    fn test_rejects_garbage() {
        for raw in ["not-an-ip", "", "1.2.3", "256.1.1.1", "[::1]:80", " 8.8.8.8"] {
            assert!(
                matches!(validate_address(raw), Err(AddressError::InvalidFormat(_))),
                "{:?} should be rejected as invalid format",
                raw
            );
        }
    }

    #[test]
    fn test_error_tags() {
        assert_eq!(AddressError::InvalidFormat(String::new()).tag(), "InvalidFormat");
        assert_eq!(AddressError::UnsupportedFamily(String::new()).tag(), "UnsupportedFamily");
        assert_eq!(AddressError::NotGlobalUnicast(String::new()).tag(), "NotGlobalUnicast");
    }
}
