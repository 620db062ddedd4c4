//! Dotted-decimal address parsing and integer conversion.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PlanError, Result};

/// Four dot-separated groups of one to three digits, nothing around them
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
        .expect("Invalid dotted quad regex")
});

/// Parse a dotted-decimal IPv4 address.
///
/// Accepts exactly four decimal octets in 0-255. Leading zeros are tolerated
/// (`010.0.0.1` is `10.0.0.1`); surrounding whitespace or any other content is
/// rejected.
///
/// # Examples
/// ```
/// use subnetplan::ip::parse_address;
/// use std::net::Ipv4Addr;
///
/// assert_eq!(parse_address("192.168.4.0"), Ok(Ipv4Addr::new(192, 168, 4, 0)));
/// assert!(parse_address("192.168.4").is_err());
/// assert!(parse_address("192.168.4.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    let caps = DOTTED_QUAD
        .captures(text)
        .ok_or_else(|| PlanError::InvalidFormat(text.to_string()))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // Three digits at most, so u16 cannot overflow
        let value: u16 = caps[i + 1]
            .parse()
            .map_err(|_| PlanError::InvalidFormat(text.to_string()))?;
        *octet = u8::try_from(value).map_err(|_| PlanError::InvalidFormat(text.to_string()))?;
    }

    Ok(Ipv4Addr::from(octets))
}

pub fn to_u32(address: Ipv4Addr) -> u32 {
    u32::from(address)
}

pub fn from_u32(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value)
}
