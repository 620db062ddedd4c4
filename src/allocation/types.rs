//! Allocation type definitions.
//!
//! Requests are immutable inputs; records are built once per allocation run
//! and pair a request with the network it received.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::ip::{Network, Sizing};

/// A named host-count requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRequest {
    /// Free text label, not required to be unique
    pub name: String,
    /// Hosts the network must hold, must be greater than 2
    #[serde(rename = "hosts")]
    pub required_hosts: u64,
}

impl CapacityRequest {
    pub fn new(name: impl Into<String>, required_hosts: u64) -> Self {
        Self {
            name: name.into(),
            required_hosts,
        }
    }
}

/// A request together with the network assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    request: CapacityRequest,
    sizing: Sizing,
    network: Network,
    sizing_rank: usize,
    assignment_step: usize,
}

impl AllocationRecord {
    pub(crate) fn new(
        request: CapacityRequest,
        sizing: Sizing,
        network: Network,
        sizing_rank: usize,
        assignment_step: usize,
    ) -> Self {
        Self {
            request,
            sizing,
            network,
            sizing_rank,
            assignment_step,
        }
    }

    pub fn request(&self) -> &CapacityRequest {
        &self.request
    }

    pub fn name(&self) -> &str {
        &self.request.name
    }

    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Addresses reserved for this request (a power of two)
    pub fn block_size(&self) -> u64 {
        self.sizing.total_addresses
    }

    pub fn prefix_len(&self) -> u8 {
        self.sizing.prefix_len
    }

    /// First usable host of the assigned network
    pub fn gateway(&self) -> Option<Ipv4Addr> {
        self.network.first_host()
    }

    /// Usable host range as (first, last)
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        let mut hosts = self.network.hosts();
        let first = hosts.next()?;
        let last = hosts.next_back().unwrap_or(first);
        Some((first, last))
    }

    /// Position of this request once sorted largest-first
    pub fn sizing_rank(&self) -> usize {
        self.sizing_rank
    }

    /// Position in which this request received its network
    pub fn assignment_step(&self) -> usize {
        self.assignment_step
    }
}

/// The outcome of one VLSM run.
///
/// Records are kept in request input order; [`in_sizing_order`](Self::in_sizing_order)
/// and [`in_assignment_order`](Self::in_assignment_order) give the other views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    base: Ipv4Addr,
    rotation_start: usize,
    records: Vec<AllocationRecord>,
}

impl AllocationPlan {
    pub(crate) fn new(base: Ipv4Addr, rotation_start: usize, records: Vec<AllocationRecord>) -> Self {
        Self {
            base,
            rotation_start,
            records,
        }
    }

    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    /// Zero-based rotation start actually used (after out-of-range reset)
    pub fn rotation_start(&self) -> usize {
        self.rotation_start
    }

    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    /// Assigned networks in request input order
    pub fn networks(&self) -> Vec<Network> {
        self.records.iter().map(AllocationRecord::network).collect()
    }

    pub fn in_sizing_order(&self) -> Vec<&AllocationRecord> {
        let mut records: Vec<_> = self.records.iter().collect();
        records.sort_by_key(|record| record.sizing_rank);
        records
    }

    pub fn in_assignment_order(&self) -> Vec<&AllocationRecord> {
        let mut records: Vec<_> = self.records.iter().collect();
        records.sort_by_key(|record| record.assignment_step);
        records
    }

    /// Total addresses reserved across every record
    pub fn total_addresses(&self) -> u64 {
        self.records.iter().map(AllocationRecord::block_size).sum()
    }
}
