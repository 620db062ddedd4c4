//! VLSM allocation.
//!
//! Requests are sized, sorted largest-first, and handed sequential blocks
//! from a base address. Assignment starts at a chosen position in the sorted
//! list and wraps around until every request has a network.
//!
//! Each block is built by snapping the cursor down to the block's own prefix.
//! When a larger block follows a smaller one (only possible with a non-zero
//! rotation start) the snap can move the block below the cursor and overlap
//! an earlier assignment. That behavior is kept as-is.

use std::net::Ipv4Addr;

use super::types::{AllocationPlan, AllocationRecord, CapacityRequest};
use crate::error::{PlanError, Result};
use crate::ip::{size_for_hosts, Network, Sizing};

/// Allocate a network for every request.
///
/// `start_index` is zero-based into the largest-first order; an
/// out-of-range value falls back to 0.
///
/// # Examples
/// ```
/// use subnetplan::allocation::{allocate_vlsm, CapacityRequest};
/// use std::net::Ipv4Addr;
///
/// let requests = vec![CapacityRequest::new("A", 50), CapacityRequest::new("B", 10)];
/// let plan = allocate_vlsm(&requests, 0, Ipv4Addr::new(192, 168, 4, 0)).unwrap();
///
/// assert_eq!(plan.records()[0].network().to_string(), "192.168.4.0/26");
/// assert_eq!(plan.records()[1].network().to_string(), "192.168.4.64/28");
/// ```
pub fn allocate_vlsm(
    requests: &[CapacityRequest],
    start_index: usize,
    base: Ipv4Addr,
) -> Result<AllocationPlan> {
    if requests.is_empty() {
        return Err(PlanError::NoRequests);
    }

    let sizings = requests
        .iter()
        .map(|request| size_for_hosts(request.required_hosts))
        .collect::<Result<Vec<Sizing>>>()?;

    let sizing_order = sizing_order(&sizings);
    for (rank, &index) in sizing_order.iter().enumerate() {
        log::debug!(
            "Sizing #{}: {} needs {} hosts, {} with margin, /{} ({} addresses)",
            rank + 1,
            requests[index].name,
            requests[index].required_hosts,
            sizings[index].with_margin,
            sizings[index].prefix_len,
            sizings[index].total_addresses
        );
    }

    let count = requests.len();
    let rotation_start = if start_index < count {
        start_index
    } else {
        log::warn!(
            "Rotation start index {} is out of range for {} networks, starting with the largest",
            start_index,
            count
        );
        0
    };

    let mut slots: Vec<Option<AllocationRecord>> = vec![None; count];
    let mut cursor = base;
    for step in 0..count {
        let rank = (rotation_start + step) % count;
        let index = sizing_order[rank];
        let sizing = sizings[index];

        let network = Network::new(cursor, sizing.prefix_len)?;
        log::debug!("Assigned {} to {} (cursor {})", network, requests[index].name, cursor);

        slots[index] = Some(AllocationRecord::new(
            requests[index].clone(),
            sizing,
            network,
            rank,
            step,
        ));

        let remaining = count - step - 1;
        if remaining > 0 {
            cursor = network
                .next_address()
                .ok_or(PlanError::AddressSpaceExhausted { after: network, remaining })?;
        }
    }

    let records: Vec<AllocationRecord> = slots.into_iter().flatten().collect();
    let plan = AllocationPlan::new(base, rotation_start, records);
    log::info!(
        "Allocated {} networks ({} addresses) from {}",
        plan.records().len(),
        plan.total_addresses(),
        base
    );

    Ok(plan)
}

/// Request indices sorted by block size, largest first; ties keep input order
pub fn sizing_order(sizings: &[Sizing]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sizings.len()).collect();
    order.sort_by(|&a, &b| sizings[b].total_addresses.cmp(&sizings[a].total_addresses));
    order
}
