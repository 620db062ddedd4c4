//! IPv4 primitives and capacity sizing.
//!
//! This module handles dotted-decimal parsing, CIDR network arithmetic
//! (canonical bases, broadcast, masks, host ranges, supernets) and the
//! host-count to block-size rule shared by both allocators.

pub mod address;
pub mod network;
pub mod sizing;

// Re-export commonly used types
pub use address::{from_u32, parse_address, to_u32};
pub use network::{Network, MAX_PREFIX_LEN};
pub use sizing::{prefix_for_addresses, size_for_hosts, Sizing};
