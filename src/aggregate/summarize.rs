//! Contiguity checks and supernet search.

use ipnet::Ipv4Net;

use crate::error::{PlanError, Result};
use crate::ip::Network;

fn sorted_by_base(networks: &[Network]) -> Vec<Network> {
    let mut sorted = networks.to_vec();
    sorted.sort();
    sorted
}

/// Check that the networks, laid out by base address, leave no gap and do
/// not overlap.
///
/// Fails with [`PlanError::NonContiguous`] naming the first offending pair.
/// Empty and single-network sets are contiguous.
pub fn validate_contiguous(networks: &[Network]) -> Result<()> {
    let sorted = sorted_by_base(networks);
    for pair in sorted.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        if previous.next_address() != Some(next.base()) {
            log::debug!("Gap or overlap between {} and {}", previous, next);
            return Err(PlanError::NonContiguous { previous, next });
        }
    }
    Ok(())
}

pub fn is_contiguous(networks: &[Network]) -> bool {
    validate_contiguous(networks).is_ok()
}

/// Find a supernet containing every network.
///
/// Starts from the lowest network and widens it one prefix bit at a time
/// until everything fits. This is a containment search: for unaligned input
/// the result can be wider than the union of the networks. A single network
/// summarizes to itself.
///
/// # Examples
/// ```
/// use subnetplan::aggregate::summarize;
/// use subnetplan::ip::Network;
///
/// let networks: Vec<Network> = vec!["192.168.0.0/25".parse().unwrap(), "192.168.0.128/25".parse().unwrap()];
/// assert_eq!(summarize(&networks).unwrap().to_string(), "192.168.0.0/24");
/// ```
pub fn summarize(networks: &[Network]) -> Result<Network> {
    let sorted = sorted_by_base(networks);
    let lowest = *sorted
        .first()
        .ok_or_else(|| PlanError::AggregationFailed("no networks to summarize".to_string()))?;

    let mut candidate = lowest;
    while !sorted.iter().all(|network| candidate.contains_network(network)) {
        candidate = candidate.supernet().ok_or_else(|| {
            PlanError::AggregationFailed(format!("no supernet of {} covers every network", lowest))
        })?;
    }

    log::debug!("Summarized {} networks into {}", sorted.len(), candidate);
    Ok(candidate)
}

/// Like [`summarize`], but only accept a supernet that covers exactly the
/// addresses of the input networks.
///
/// Sets with gaps, or contiguous sets whose combined block is not aligned
/// to its own size, fail with [`PlanError::AggregationFailed`].
pub fn summarize_exact(networks: &[Network]) -> Result<Network> {
    let supernet = summarize(networks)?;

    let nets: Vec<Ipv4Net> = networks.iter().map(Network::as_ipv4net).collect();
    let merged = Ipv4Net::aggregate(&nets);
    match merged.as_slice() {
        [single] if *single == supernet.as_ipv4net() => Ok(supernet),
        _ => Err(PlanError::AggregationFailed(format!(
            "the networks merge into {} blocks, not the single block {}",
            merged.len(),
            supernet
        ))),
    }
}
