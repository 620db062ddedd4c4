//! Capacity sizing.
//!
//! Turns a required host count into the smallest CIDR block that holds it
//! with growth margin: 20% extra plus 2 addresses for network and broadcast,
//! rounded up to the next power of two.

use serde::Serialize;

use super::network::MAX_PREFIX_LEN;
use crate::error::{PlanError, Result};

/// Smallest host count a request may ask for (exclusive)
pub const MIN_REQUIRED_HOSTS: u64 = 2;

/// Block size and prefix derived from a host requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sizing {
    /// Required hosts plus 20% (rounded up) plus 2
    pub with_margin: u64,
    /// `with_margin` rounded up to a power of two
    pub total_addresses: u64,
    pub prefix_len: u8,
}

/// Size a block for `required_hosts`.
///
/// # Examples
/// ```
/// use subnetplan::ip::size_for_hosts;
///
/// let sizing = size_for_hosts(10).unwrap();
/// assert_eq!(sizing.with_margin, 14);
/// assert_eq!(sizing.total_addresses, 16);
/// assert_eq!(sizing.prefix_len, 28);
///
/// assert!(size_for_hosts(2).is_err());
/// ```
pub fn size_for_hosts(required_hosts: u64) -> Result<Sizing> {
    if required_hosts <= MIN_REQUIRED_HOSTS {
        return Err(PlanError::InvalidCapacity(required_hosts));
    }

    // ceil(n * 1.2) in integers: ceil(6n / 5)
    let with_margin = required_hosts
        .checked_mul(6)
        .map(|scaled| scaled.div_ceil(5) + 2)
        .ok_or(PlanError::InvalidCapacity(required_hosts))?;

    let total_addresses = with_margin
        .checked_next_power_of_two()
        .ok_or(PlanError::InvalidCapacity(required_hosts))?
        .max(2);

    let prefix_len = prefix_for_addresses(total_addresses)
        .ok_or(PlanError::InvalidCapacity(required_hosts))?;

    Ok(Sizing {
        with_margin,
        total_addresses,
        prefix_len,
    })
}

/// Shortest-fitting prefix for a block of `total` addresses: `32 - ceil(log2(total))`.
///
/// Returns `None` when the block would not fit in the IPv4 space or `total` is 0.
pub fn prefix_for_addresses(total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let host_bits = total.checked_next_power_of_two()?.trailing_zeros();
    u8::try_from(host_bits)
        .ok()
        .and_then(|bits| MAX_PREFIX_LEN.checked_sub(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_for_ten_hosts() {
        assert_eq!(
            size_for_hosts(10),
            Ok(Sizing { with_margin: 14, total_addresses: 16, prefix_len: 28 })
        );
    }

    #[test]
    fn test_size_for_fifty_hosts() {
        assert_eq!(
            size_for_hosts(50),
            Ok(Sizing { with_margin: 62, total_addresses: 64, prefix_len: 26 })
        );
    }

    #[test]
    fn test_margin_rounding() {
        // 3 * 1.2 = 3.6 -> 4, + 2 = 6 -> 8 addresses
        assert_eq!(size_for_hosts(3).unwrap().with_margin, 6);
        assert_eq!(size_for_hosts(3).unwrap().total_addresses, 8);
        // 5 * 1.2 = 6 exactly, no extra rounding
        assert_eq!(size_for_hosts(5).unwrap().with_margin, 8);
        assert_eq!(size_for_hosts(5).unwrap().prefix_len, 29);
        // 6 * 1.2 = 7.2 -> 8, + 2 = 10 -> 16 addresses
        assert_eq!(size_for_hosts(6).unwrap().total_addresses, 16);
    }

    #[test]
    fn test_margin_crossing_power_of_two() {
        // 105 -> 126 + 2 = 128, stays in /25
        assert_eq!(size_for_hosts(105).unwrap().prefix_len, 25);
        // 106 -> 128 + 2 = 130, spills into /24
        assert_eq!(size_for_hosts(106).unwrap().prefix_len, 24);
    }

    #[test]
    fn test_rejects_small_counts() {
        assert_eq!(size_for_hosts(0), Err(PlanError::InvalidCapacity(0)));
        assert_eq!(size_for_hosts(2), Err(PlanError::InvalidCapacity(2)));
    }

    #[test]
    fn test_rejects_counts_beyond_ipv4() {
        assert_eq!(size_for_hosts(4_000_000_000), Err(PlanError::InvalidCapacity(4_000_000_000)));
        assert_eq!(size_for_hosts(u64::MAX), Err(PlanError::InvalidCapacity(u64::MAX)));
    }

    #[test]
    fn test_prefix_for_addresses() {
        assert_eq!(prefix_for_addresses(1), Some(32));
        assert_eq!(prefix_for_addresses(16), Some(28));
        assert_eq!(prefix_for_addresses(17), Some(27));
        assert_eq!(prefix_for_addresses(1 << 32), Some(0));
        assert_eq!(prefix_for_addresses((1 << 32) + 1), None);
        assert_eq!(prefix_for_addresses(0), None);
    }
}
