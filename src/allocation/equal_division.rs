//! Equal-division allocation.
//!
//! Splits an inclusive address range into a requested number of blocks that
//! all share the largest power-of-two size the range allows.

use std::net::Ipv4Addr;

use serde::Serialize;

use crate::error::{PlanError, Result};
use crate::ip::{from_u32, to_u32, Network, MAX_PREFIX_LEN};

/// Smallest block worth handing out: network, broadcast and two hosts
pub const MIN_BLOCK_SIZE: u64 = 4;

/// Result of dividing a range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Division {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
    pub requested_blocks: u32,
    /// Addresses per block actually used
    pub block_size: u64,
    pub prefix_len: u8,
    pub networks: Vec<Network>,
}

/// Divide `[start, end]` into `block_count` equally sized blocks.
///
/// The block size is the largest power of two not exceeding
/// `range_size / block_count`. Blocks are laid out from `start`; when `start`
/// is not aligned to the block size the first block snaps down to the
/// enclosing boundary and later blocks follow it, so the result can begin
/// below `start`. Fewer than `block_count` blocks are returned if the range
/// runs out first.
///
/// # Examples
/// ```
/// use subnetplan::allocation::divide_range;
/// use std::net::Ipv4Addr;
///
/// let division = divide_range(
///     Ipv4Addr::new(200, 200, 100, 0),
///     Ipv4Addr::new(200, 200, 101, 255),
///     4,
/// ).unwrap();
/// assert_eq!(division.block_size, 128);
/// assert_eq!(division.prefix_len, 25);
/// assert_eq!(division.networks.len(), 4);
/// ```
pub fn divide_range(start: Ipv4Addr, end: Ipv4Addr, block_count: u32) -> Result<Division> {
    if block_count == 0 {
        return Err(PlanError::InvalidBlockCount);
    }

    let too_small = || PlanError::RangeTooSmall {
        start,
        end,
        blocks: block_count,
    };

    let first = to_u32(start);
    let last = to_u32(end);
    if last < first {
        return Err(too_small());
    }

    let total = u64::from(last - first) + 1;
    let per_block = total / u64::from(block_count);
    if per_block == 0 {
        return Err(too_small());
    }

    // Largest power of two <= per_block
    let block_size = 1u64 << (u64::BITS - 1 - per_block.leading_zeros());
    if block_size < MIN_BLOCK_SIZE {
        return Err(too_small());
    }

    // block_size <= 2^32, so at most 32 host bits
    let prefix_len = MAX_PREFIX_LEN - block_size.trailing_zeros() as u8;

    log::debug!(
        "Dividing {} - {} ({} addresses) into {} blocks of {} (/{})",
        start, end, total, block_count, block_size, prefix_len
    );

    let mut networks = Vec::new();
    let mut cursor = first;
    while networks.len() < block_count as usize {
        let network = Network::new(from_u32(cursor), prefix_len)?;
        if to_u32(network.base()) < cursor {
            log::debug!("Block {} snapped below {} to {}", networks.len() + 1, from_u32(cursor), network);
        }
        networks.push(network);

        match network.next_address() {
            Some(next) if to_u32(next) <= last => cursor = to_u32(next),
            _ => break,
        }
    }

    if networks.len() < block_count as usize {
        log::info!(
            "Range {} - {} produced {} of {} requested blocks",
            start, end, networks.len(), block_count
        );
    }

    Ok(Division {
        start,
        end,
        requested_blocks: block_count,
        block_size,
        prefix_len,
        networks,
    })
}
