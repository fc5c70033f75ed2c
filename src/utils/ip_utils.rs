//! Client address helpers for callers sitting behind a proxy.

use crate::placement::address::{validate_address, AddressError};

/// Pick the caller's raw address from proxy headers or the socket address.
///
/// Priority: `X-Real-IP`, then the first entry of `X-Forwarded-For`, then the
/// remote socket address. Empty header values count as absent. Any port
/// suffix is left in place; validation removes it.
pub fn client_address<'a>(
    real_ip: Option<&'a str>,
    forwarded_for: Option<&'a str>,
    remote_addr: &'a str,
) -> &'a str {
    if let Some(ip) = real_ip.map(str::trim).filter(|ip| !ip.is_empty()) {
        return ip;
    }

    if let Some(first) = forwarded_for
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return first;
    }

    remote_addr.trim()
}

/// Resolve and validate the caller's address
pub fn resolve_client_ip(
    real_ip: Option<&str>,
    forwarded_for: Option<&str>,
    remote_addr: &str,
) -> Result<String, AddressError> {
    let raw = client_address(real_ip, forwarded_for, remote_addr);
    let ip = validate_address(raw).map_err(|e| {
        log::warn!("Invalid IP from request: {} - {}", raw, e);
        e
    })?;
    log::debug!("Resolved client IP {} from '{}'", ip, raw);
    Ok(ip)
}
