//! CIDR network representation.
//!
//! A [`Network`] wraps an [`Ipv4Net`] whose host bits are always cleared.
//! Construction never rejects a non-aligned address, it snaps it down to the
//! enclosing block.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnet::{Ipv4AddrRange, Ipv4Net};
use serde::{Deserialize, Serialize};

use super::address::parse_address;
use crate::error::{PlanError, Result};

/// Longest valid IPv4 prefix
pub const MAX_PREFIX_LEN: u8 = 32;

/// An IPv4 network in CIDR form.
///
/// Ordering is by base address, then prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Ipv4Net", into = "Ipv4Net")]
pub struct Network(Ipv4Net);

impl Network {
    /// Build the network of the given prefix length that contains `address`.
    ///
    /// Host bits are cleared, so `192.168.4.70/26` becomes `192.168.4.64/26`.
    pub fn new(address: Ipv4Addr, prefix_len: u8) -> Result<Self> {
        let net = Ipv4Net::new(address, prefix_len).map_err(|_| PlanError::InvalidPrefix(prefix_len))?;
        Ok(Network(net.trunc()))
    }

    pub fn base(&self) -> Ipv4Addr {
        self.0.network()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }

    pub fn host_mask(&self) -> u32 {
        u32::from(self.0.hostmask())
    }

    /// Subnet mask in dotted form, e.g. `255.255.255.192` for /26
    pub fn netmask(&self) -> Ipv4Addr {
        self.0.netmask()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.0.broadcast()
    }

    /// Total number of addresses in the block, including network and broadcast
    pub fn num_addresses(&self) -> u64 {
        u64::from(self.host_mask()) + 1
    }

    /// First address after this block, or `None` when the block ends at 255.255.255.255
    pub fn next_address(&self) -> Option<Ipv4Addr> {
        u32::from(self.broadcast()).checked_add(1).map(Ipv4Addr::from)
    }

    pub fn contains(&self, address: Ipv4Addr) -> bool {
        self.0.contains(&address)
    }

    /// True when `other` lies entirely inside this network
    pub fn contains_network(&self, other: &Network) -> bool {
        self.0.contains(&other.0)
    }

    /// The enclosing network one prefix bit shorter, or `None` at /0
    pub fn supernet(&self) -> Option<Network> {
        self.0.supernet().map(Network::from)
    }

    /// Usable host addresses in ascending order.
    ///
    /// Network and broadcast addresses are excluded; /31 and /32 yield nothing.
    /// Each call starts a fresh iteration.
    pub fn hosts(&self) -> Ipv4AddrRange {
        if self.prefix_len() >= MAX_PREFIX_LEN - 1 {
            // Start past end, so the range is empty
            return Ipv4AddrRange::new(Ipv4Addr::new(0, 0, 0, 1), Ipv4Addr::UNSPECIFIED);
        }
        self.0.hosts()
    }

    /// First usable host, used as the default gateway
    pub fn first_host(&self) -> Option<Ipv4Addr> {
        self.hosts().next()
    }

    pub fn last_host(&self) -> Option<Ipv4Addr> {
        self.hosts().next_back()
    }

    pub fn usable_hosts(&self) -> u64 {
        if self.prefix_len() >= MAX_PREFIX_LEN - 1 {
            0
        } else {
            self.num_addresses() - 2
        }
    }

    pub fn as_ipv4net(&self) -> Ipv4Net {
        self.0
    }
}

impl From<Ipv4Net> for Network {
    fn from(net: Ipv4Net) -> Self {
        Network(net.trunc())
    }
}

impl From<Network> for Ipv4Net {
    fn from(network: Network) -> Self {
        network.0
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Network {
    type Err = PlanError;

    /// Parse `a.b.c.d/p`, canonicalizing a non-aligned address
    fn from_str(s: &str) -> Result<Self> {
        let (address, prefix) = s
            .split_once('/')
            .ok_or_else(|| PlanError::InvalidFormat(s.to_string()))?;
        let address = parse_address(address)?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlanError::InvalidFormat(s.to_string()));
        }
        let prefix_len = prefix
            .parse::<u8>()
            .map_err(|_| PlanError::InvalidFormat(s.to_string()))?;
        Network::new(address, prefix_len)
    }
}
