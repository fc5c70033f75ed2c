//! Address to point mapping.
//!
//! The first three octets of an IPv4 address become the x, y and z
//! coordinates, each scaled linearly from `0..=255` onto `[-bound, bound]`.
//! The fourth octet does not contribute.

use std::net::IpAddr;

use super::address::as_ipv4;
use super::point::Point;

/// Scale one octet onto `[-bound, bound]`
pub fn normalize_octet(octet: u8, bound: f64) -> f64 {
    (f64::from(octet) / 255.0) * (2.0 * bound) - bound
}

/// Map an address to its raw (unresolved) position.
///
/// Addresses that have no 4-byte form map to the origin.
pub fn map_address(ip: IpAddr, bound: f64) -> Point {
    let Some(ipv4) = as_ipv4(ip) else {
        return Point::origin();
    };

    let octets = ipv4.octets();
    Point::new(
        normalize_octet(octets[0], bound),
        normalize_octet(octets[1], bound),
        normalize_octet(octets[2], bound),
    )
}
