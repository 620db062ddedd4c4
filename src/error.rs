//! Error kinds produced by the planning engine.
//!
//! Every variant is recoverable: callers report it and carry on with the
//! next request. The engine itself never prints and never panics on user input.

use std::net::Ipv4Addr;

use crate::ip::Network;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur while sizing, allocating or aggregating networks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid IPv4 address: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid prefix length /{0} (must be 0-32)")]
    InvalidPrefix(u8),

    #[error("Invalid host count {0}: a network needs more than 2 hosts")]
    InvalidCapacity(u64),

    #[error("Range {start} - {end} cannot be divided into {blocks} blocks of at least 4 addresses")]
    RangeTooSmall {
        start: Ipv4Addr,
        end: Ipv4Addr,
        blocks: u32,
    },

    #[error("Block count must be at least 1")]
    InvalidBlockCount,

    #[error("Networks {previous} and {next} are not contiguous")]
    NonContiguous { previous: Network, next: Network },

    #[error("Cannot summarize the selected networks into a single supernet: {0}")]
    AggregationFailed(String),

    #[error("Network {index} is not valid (choose 1 to {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("'{0}' is not a network number")]
    InvalidSelection(String),

    #[error("At least two networks must be selected to summarize (got {0})")]
    InsufficientSelection(usize),

    #[error("No networks were requested")]
    NoRequests,

    #[error("Address space exhausted after {after}: {remaining} network(s) left unassigned")]
    AddressSpaceExhausted { after: Network, remaining: usize },
}
