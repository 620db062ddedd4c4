//! # subnetplan - IPv4 address-space planning
//!
//! This library computes subnet boundaries for IPv4 address plans: it sizes
//! networks from host-count requirements, assigns non-overlapping blocks from
//! a base address, divides raw ranges into equal blocks, and aggregates
//! contiguous networks back into a covering supernet.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `ip`: address parsing, CIDR arithmetic and capacity sizing
//! - `allocation`: VLSM allocation and equal-division of ranges
//! - `aggregate`: contiguity validation, supernet search and plan selections
//! - `config`: YAML plan file structures and validation
//! - `config_loader`: plan file loading
//! - `report`: text and JSON rendering of results
//! - `error`: the engine's error kinds
//!
//! ## Example Usage
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use subnetplan::aggregate::summarize;
//! use subnetplan::allocation::{allocate_vlsm, CapacityRequest};
//!
//! let requests = vec![
//!     CapacityRequest::new("Sales", 100),
//!     CapacityRequest::new("Lab", 50),
//!     CapacityRequest::new("Office", 50),
//! ];
//! let plan = allocate_vlsm(&requests, 0, Ipv4Addr::new(10, 0, 0, 0))?;
//!
//! // Sales gets a /25, Lab and Office a /26 each
//! assert_eq!(plan.records()[0].network().to_string(), "10.0.0.0/25");
//!
//! let supernet = summarize(&plan.networks())?;
//! assert_eq!(supernet.to_string(), "10.0.0.0/24");
//! # Ok::<(), subnetplan::error::PlanError>(())
//! ```
//!
//! ## Plan File Format
//!
//! ```yaml
//! base_address: 192.168.4.0
//! rotation_start: 1      # one-based, optional
//! networks:
//!   - name: Sales
//!     hosts: 50
//!   - name: Lab
//!     hosts: 10
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return `Result<T, PlanError>`; every error is
//! recoverable and nothing in the library prints. The `subnetplan` binary
//! wraps these in `color_eyre` reports.

pub mod error;
pub mod ip;
pub mod allocation;
pub mod aggregate;
pub mod config;
pub mod config_loader;
pub mod report;
